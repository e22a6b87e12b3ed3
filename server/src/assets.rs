//! Serves the compiled admin front-end embedded in the binary.
//!
//! Requests for files that exist are answered with the file. Everything
//! else gets `index.html`, so client-side routes such as `/listSite` or
//! `/site?id=...` survive a reload.

use actix_web::{web, HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use log::debug;
use mime_guess::from_path;

pub static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// File that answers `request_path` in `dir`, with its content type.
pub fn resolve<'a>(dir: &'a Dir<'a>, request_path: &str) -> Option<(&'a File<'a>, String)> {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    if let Some(file) = dir.get_file(file_path) {
        let mime = from_path(file_path).first_or_octet_stream();
        return Some((file, mime.to_string()));
    }

    debug!("No embedded file for {:?}, falling back to {}", request_path, INDEX);
    dir.get_file(INDEX)
        .map(|index| (index, "text/html; charset=utf-8".to_string()))
}

pub fn respond(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    match resolve(dir, request_path) {
        Some((file, content_type)) => HttpResponse::Ok()
            .content_type(content_type)
            .body(file.contents().to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    respond(&STATIC_DIR, req.path())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::route().to(serve_embedded));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};

    static FIXTURE: Dir = include_dir!("$CARGO_MANIFEST_DIR/fixtures/dist");
    static EMPTY: Dir = Dir::new("", &[]);

    #[test]
    fn root_is_index() {
        let (file, mime) = resolve(&FIXTURE, "/").unwrap();
        assert_eq!(file.path().to_str(), Some("index.html"));
        assert!(mime.starts_with("text/html"));
    }

    #[test]
    fn existing_assets_keep_their_type() {
        let (file, mime) = resolve(&FIXTURE, "/assets/app.css").unwrap();
        assert_eq!(file.path().to_str(), Some("assets/app.css"));
        assert_eq!(mime, "text/css");
    }

    #[test]
    fn client_routes_fall_back_to_index() {
        for path in ["/listSite", "/site", "/site/"] {
            let (file, _) = resolve(&FIXTURE, path).unwrap();
            assert_eq!(file.path().to_str(), Some("index.html"), "{}", path);
        }
    }

    #[test]
    fn missing_build_is_not_found() {
        assert!(resolve(&EMPTY, "/listSite").is_none());
    }

    #[actix_web::test]
    async fn responds_with_embedded_bytes() {
        let response = respond(&FIXTURE, "/listSite");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body()).await.unwrap();
        assert!(std::str::from_utf8(&body).unwrap().contains("Astral Grid - Admin"));

        let missing = respond(&EMPTY, "/");
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
