use std::path::Path;

use anyhow::Result;
use tera::Tera;

pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new(base_path: &Path) -> Result<Self> {
        let pattern = format!("{}/**/*.html", base_path.to_string_lossy());
        let tera = match Tera::new(&pattern) {
            Ok(t) => t,
            Err(e) => {
                // A missing or empty template directory is reported at render
                // time instead, with the list of loaded templates.
                if e.to_string().contains("no templates found")
                    || e.to_string().contains("match any files")
                {
                    Tera::default()
                } else {
                    return Err(e.into());
                }
            }
        };

        Ok(Self { tera })
    }

    pub fn render(&self, template_name: &str, context: &tera::Context) -> Result<String> {
        let template_file = format!("{}.html", template_name);

        self.tera.render(&template_file, context).map_err(|e| {
            let loaded = self.tera.get_template_names().collect::<Vec<_>>();
            anyhow::anyhow!(
                "template render failed: {}. Requested: '{}'. Loaded: {:?}",
                e,
                template_file,
                loaded
            )
        })
    }
}
