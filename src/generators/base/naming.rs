use crate::error::{Error, Result};
use crate::models::{GenerationKind, NamingProfile, HEADER_EXTENSION, INTERFACE_PREFIX};

/// Final path segment up to its first `.`.
///
/// Both `/` and `\` are treated as separators so Windows-style paths behave
/// the same on every platform.
pub fn base_token(path: &str) -> &str {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    file_name.split('.').next().unwrap_or(file_name)
}

/// Derive class and interface names for `kind` from the input path.
///
/// For [`GenerationKind::Interface`] the path names the interface to create
/// and the prefix is added. For every other kind the path names an existing
/// interface whose file name must contain the interface prefix; the text
/// after its first occurrence becomes the class stem.
pub fn derive_naming(kind: GenerationKind, path: &str, year: i32) -> Result<NamingProfile> {
    let token = base_token(path);
    if token.is_empty() {
        return Err(Error::MalformedInput(format!(
            "cannot derive a class name from '{}'",
            path
        )));
    }

    let (class_name, interface_name) = match kind {
        GenerationKind::Interface => {
            let class_name = format!("{}{}", INTERFACE_PREFIX, token);
            (class_name.clone(), class_name)
        }
        _ => {
            let stem = match token.split_once(INTERFACE_PREFIX) {
                Some((_, stem)) if !stem.is_empty() => stem,
                _ => {
                    return Err(Error::MalformedInput(format!(
                        "interface file name '{}' must contain the '{}' prefix followed by a name",
                        token, INTERFACE_PREFIX
                    )))
                }
            };
            (format!("{}{}", kind.prefix(), stem), token.to_string())
        }
    };

    Ok(NamingProfile {
        file_name: format!("{}{}", class_name, HEADER_EXTENSION),
        class_name,
        interface_name,
        year,
        copyright_text: String::new(),
    })
}
