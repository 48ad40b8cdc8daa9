//! Usage guide served when a path matches no shape.

use axum::response::Html;

const USAGE_GUIDE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>GitHub CORS Proxy - Usage Guide</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; line-height: 1.5; }
  code { background: #f3f3f3; padding: 0.1rem 0.3rem; border-radius: 3px; }
  td { padding: 0.25rem 0.75rem 0.25rem 0; vertical-align: top; }
</style>
</head>
<body>
<h1>Usage Guide</h1>
<p>This proxy fetches public GitHub files and adds <code>Access-Control-Allow-Origin: *</code>
so they can be downloaded from browser code. Prefix every path below with your access prefix.</p>
<table>
  <tr><td>Release asset</td><td><code>/gh/&lt;owner&gt;/&lt;repo&gt;/releases/download/&lt;tag&gt;/&lt;file&gt;</code></td></tr>
  <tr><td>File at tag</td><td><code>/gh/&lt;owner&gt;/&lt;repo&gt;@&lt;tag&gt;/&lt;file&gt;</code></td></tr>
  <tr><td>Blob</td><td><code>/gh/&lt;owner&gt;/&lt;repo&gt;/blob/&lt;ref&gt;/&lt;file&gt;</code></td></tr>
  <tr><td>Raw file</td><td><code>/gh/&lt;owner&gt;/&lt;repo&gt;/raw/&lt;ref&gt;/&lt;file&gt;</code></td></tr>
</table>
<h2>Examples</h2>
<ul>
  <li><code>/gh/torvalds/linux/releases/download/v6.1/patch.gz</code></li>
  <li><code>/gh/jquery/jquery@3.6.4/dist/jquery.min.js</code></li>
  <li><code>/gh/nginx/nginx/blob/master/CHANGELOG</code></li>
  <li><code>/gh/nginx/nginx/raw/master/CHANGELOG</code></li>
</ul>
</body>
</html>
"#;

/// Render the usage guide. Takes no request context.
pub fn render() -> Html<&'static str> {
    Html(USAGE_GUIDE)
}
