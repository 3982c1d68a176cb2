//! One generated icon component module.

use std::path::{Path, PathBuf};

use nori_core::{GeneratedFile, capitalize_first_letter};

/// A single `<identifier>.tsx` module wrapping one SVG.
///
/// The exported symbol is the capitalized identifier with an `Icon`
/// suffix; the file name is the lowercased identifier.
pub struct ComponentTsx {
    name: String,
    jsx: String,
}

impl ComponentTsx {
    pub fn new(name: impl Into<String>, jsx: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            jsx: jsx.into(),
        }
    }

    /// File stem: the lowercased identifier.
    pub fn file_stem(&self) -> String {
        self.name.to_lowercase()
    }
}

impl GeneratedFile for ComponentTsx {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.tsx", self.file_stem()))
    }

    fn render(&self) -> String {
        format!(
            r#"import {{ IconProps }} from "./types"

export const {component}Icon = (props: IconProps) => (
  {jsx}
)
"#,
            component = capitalize_first_letter(&self.name),
            jsx = self.jsx,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_lowercased_identifier() {
        let file = ComponentTsx::new("brandLogo", "<svg/>");
        assert_eq!(file.path(Path::new("out")), PathBuf::from("out/brandlogo.tsx"));
    }

    #[test]
    fn test_render_exports_capitalized_component() {
        let code = ComponentTsx::new("brandLogo", "<svg {...props}/>").render();
        assert!(code.contains(r#"import { IconProps } from "./types""#));
        assert!(code.contains("export const BrandLogoIcon = (props: IconProps) => ("));
        assert!(code.contains("<svg {...props}/>"));
    }
}
