//! Page template for generated documentation.

use minijinja::{context, Environment};

/// Context for rendering one doc page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Page title
    pub title: String,
    /// Site title appended to the browser title
    pub site_title: String,
    /// Rendered content HTML
    pub content: String,
    /// Source file name shown in the footer
    pub source_file: String,
    /// Last-updated date shown in the footer
    pub updated: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a template engine with the built-in page template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        Self { env }
    }

    /// Render a doc page.
    pub fn render_page(&self, context: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            title => &context.title,
            site_title => &context.site_title,
            content => &context.content,
            source_file => &context.source_file,
            updated => &context.updated,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ title }} - {{ site_title }}</title>
  <link rel="stylesheet" href="../styles.css">
  <style>
    .doc-page {
      max-width: 800px;
      margin: 0 auto;
      padding: 40px 20px;
    }
    .doc-content {
      background: white;
      border-radius: 16px;
      padding: 40px;
      box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
    }
    .doc-content h1 {
      font-size: 32px;
      margin-bottom: 24px;
      color: rgba(0, 0, 0, 0.9);
    }
    .doc-content h2 {
      font-size: 24px;
      margin: 32px 0 16px 0;
      color: rgba(0, 0, 0, 0.9);
    }
    .doc-content h3 {
      font-size: 18px;
      margin: 24px 0 12px 0;
      color: rgba(0, 0, 0, 0.9);
    }
    .doc-content p, .doc-content li {
      font-size: 16px;
      line-height: 1.6;
      color: rgba(0, 0, 0, 0.8);
      margin-bottom: 12px;
    }
    .doc-content code {
      background: rgba(0, 0, 0, 0.05);
      padding: 2px 6px;
      border-radius: 4px;
      font-family: 'Monaco', 'Menlo', monospace;
      font-size: 14px;
    }
    .doc-content pre {
      background: rgba(0, 0, 0, 0.05);
      padding: 16px;
      border-radius: 8px;
      overflow-x: auto;
      margin: 16px 0;
    }
    .back-link {
      display: inline-block;
      margin-bottom: 24px;
      color: #F8604A;
      text-decoration: none;
      font-weight: 500;
    }
    .back-link:hover {
      text-decoration: underline;
    }
  </style>
</head>
<body>
  <div class="doc-page">
    <a href="../index.html" class="back-link">&larr; Back to the demo page</a>

    <div class="doc-content">
      {{ content | safe }}

      <hr>

      <p><strong>Source:</strong> {{ source_file }}</p>
      <p><strong>Last updated:</strong> {{ updated }}</p>
    </div>
  </div>
</body>
</html>"##;
