/// Fixture: C++ interface headers

pub const SINGLE_FUNCTION: &str = r#"#pragma once

class I_Foo
{
public:
    virtual ~I_Foo() {}

    virtual void run() = 0;
};
"#;

pub const WIDGET: &str = r#"#pragma once
#include <string>
#include "Gadget.h"

class I_Widget
{
public:
    virtual ~I_Widget() {}

    virtual void resize(int width, int height) = 0;
    virtual std::string name() const = 0;
    virtual void attach(const Gadget& gadget) = 0;
    virtual void reset(int mode = defaultMode()) const;
    void helper() = 0;
};
"#;

pub const NO_DECLARATIONS: &str = r#"#pragma once

class I_Empty
{
public:
    virtual ~I_Empty() {}
};
"#;
