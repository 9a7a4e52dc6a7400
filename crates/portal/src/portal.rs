//! Portal page

use salvo::prelude::*;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Portal page handler
///
/// Serves the single-page portal with its Users, Products and Orders tabs.
#[handler]
pub(crate) async fn handler(res: &mut Response) {
    res.render(Text::Html(INDEX_HTML));
}
