use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";

pub fn index_path(root: &str) -> PathBuf {
    Path::new(root).join(INDEX_FILE)
}

/// Serve the built frontend from `root`.
///
/// Existing files are returned as-is; any other path gets `index.html` so the
/// client-side router can resolve routes like `/gis-tools/reproject` on reload.
/// Mounted at `/`, so it must be registered after every other service.
pub fn spa_service(root: &str) -> Files {
    let index = index_path(root);
    Files::new("/", root)
        .index_file(INDEX_FILE)
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&index).await?;
                let res = file.into_response(&req);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}
