use axum::http::Uri;
use axum::response::Html;
use once_cell::sync::Lazy;

const TITLE: &str = "Skillcrucial";

/// Marker the page template is split on; everything before it is written
/// ahead of the rendered app markup, everything after closes the page.
const BODY_MARKER: &str = "__app__";

static SHELL: Lazy<(String, String)> = Lazy::new(|| {
    let page = page_template(TITLE);
    let (start, end) = page
        .split_once(BODY_MARKER)
        .expect("shell template contains the body marker");
    (start.to_string(), end.to_string())
});

fn page_template(title: &str) -> String {
    format!(
        "<!doctype html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"utf-8\" />\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\
         <title>{title}</title>\
         <link rel=\"shortcut icon\" href=\"/images/favicon.ico\" />\
         <link rel=\"stylesheet\" href=\"/css/main.css\" />\
         </head>\
         <body>\
         <div id=\"root\">{BODY_MARKER}</div>\
         <script src=\"/js/main.bundle.js\"></script>\
         </body>\
         </html>"
    )
}

/// Render the application markup for a location.
///
/// The server-side view bundle is an external collaborator. Without one the
/// mount point ships empty and the client renders the whole app, which is
/// how the original degraded when the bundle was not built.
pub fn render_app(_location: &str) -> String {
    String::new()
}

/// GET / and every non-API path - the server-rendered application shell.
pub async fn shell(uri: Uri) -> Html<String> {
    let (start, end) = (&SHELL.0, &SHELL.1);
    let app = render_app(uri.path());

    let mut page = String::with_capacity(start.len() + app.len() + end.len());
    page.push_str(start);
    page.push_str(&app);
    page.push_str(end);

    Html(page)
}
