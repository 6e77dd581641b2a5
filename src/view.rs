//! Server-rendered markup for the single demo page.

const STYLE: &str = r#"
    body {
        font-family: "Segoe UI", Arial, sans-serif;
        background-color: #f7f8fa;
        max-width: 640px;
        margin: 0 auto;
        padding: 24px 16px;
    }
    .header { text-align: center; }
    .header .emoji { font-size: 60px; }
    .header h1 { font-weight: 700; margin-bottom: 5px; }
    .header p { margin-top: -10px; font-size: 17px; }
    .upload-form { text-align: center; margin-top: 18px; }
    .divider {
        margin-top: 25px;
        margin-bottom: 25px;
        height: 1px;
        background-color: #e1e4e8;
    }
    .preview { text-align: center; }
    .preview img { max-width: 320px; border-radius: 8px; }
    .pred-card {
        background: white;
        padding: 22px;
        border-radius: 18px;
        box-shadow: 0px 3px 18px rgba(0,0,0,0.08);
        text-align: center;
        margin-top: 22px;
    }
    .pred-card .label { color: #2E7D32; font-weight: 700; }
    .pred-card img { width: 130px; }
    .error-card {
        background: #fdecea;
        color: #b71c1c;
        padding: 18px;
        border-radius: 12px;
        text-align: center;
        margin-top: 22px;
    }
    .footer {
        text-align: center;
        margin-top: 45px;
        color: #999;
        font-size: 12px;
    }
"#;

fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8"/>
<title>Pistachio Classifier</title>
<style>{STYLE}</style>
</head>
<body>
<div class="header">
    <span class="emoji">&#127792;</span>
    <h1>Pistachio Classifier</h1>
    <p>Kirmizi vs Siirt Pistachio</p>
</div>
<form class="upload-form" method="post" action="/" enctype="multipart/form-data">
    <input type="file" name="file" accept=".jpg,.jpeg,.png" required/>
    <button type="submit">Classify</button>
</form>
{body}
<div class="footer">Pistachio Classifier demo</div>
</body>
</html>"#
    )
}

/// The idle page: upload prompt only, no result.
pub fn index_page() -> String {
    page("")
}

/// The result page: the original upload, the winning label and the gauge.
pub fn result_page(image_mime: &str, image_b64: &str, label: &str, gauge_b64: &str) -> String {
    let body = format!(
        r#"<div class="divider"></div>
<div class="preview">
    <img src="data:{image_mime};base64,{image_b64}" alt="uploaded pistachio"/>
</div>
<div class="pred-card">
    <div><b>Prediction:</b> <span class="label">{label}</span></div>
    <img src="data:image/png;base64,{gauge_b64}" alt="confidence gauge"/>
</div>"#
    );
    page(&body)
}

/// A failed request, rendered as a visible message in the page.
pub fn error_page(message: &str) -> String {
    let body = format!(
        r#"<div class="error-card">{}</div>"#,
        escape_html(message)
    );
    page(&body)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
