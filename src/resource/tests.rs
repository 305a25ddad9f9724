//! Tests for content kinds and resource resolution.

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::parser::IncomingRequest;
    use crate::resource::{Error, MimeKind, ResourceResolver, RootPolicy, CONTENT_TYPES};
    use crate::server::StatusCode;

    fn get(path: &str) -> IncomingRequest {
        IncomingRequest::new("GET", path, "HTTP/1.1", Vec::new())
    }

    fn site() -> (TempDir, ResourceResolver) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>home</h1>\n").unwrap();
        fs::write(dir.path().join("404.html"), "<h1>missing</h1>\n").unwrap();
        let resolver = ResourceResolver::new(dir.path(), "index.html", "404.html");
        (dir, resolver)
    }

    #[test]
    fn test_extension_lookup() {
        assert_eq!(MimeKind::from_extension("html"), MimeKind::Html);
        assert_eq!(MimeKind::from_extension("gif"), MimeKind::Gif);
        assert_eq!(MimeKind::from_extension("jpeg"), MimeKind::Jpeg);
        assert_eq!(MimeKind::from_extension("mp3"), MimeKind::Mp3);
        assert_eq!(MimeKind::from_extension("pdf"), MimeKind::Pdf);
        assert_eq!(MimeKind::from_extension("xyz"), MimeKind::Unknown);
        // Matching is case-sensitive
        assert_eq!(MimeKind::from_extension("HTML"), MimeKind::Unknown);
        assert_eq!(MimeKind::from_extension("jpg"), MimeKind::Unknown);
    }

    #[test]
    fn test_file_name_kinds() {
        assert_eq!(MimeKind::from_file_name("song.mp3"), MimeKind::Mp3);
        assert_eq!(MimeKind::from_file_name("archive.tar.pdf"), MimeKind::Pdf);
        assert_eq!(MimeKind::from_file_name("README"), MimeKind::Unknown);
        assert_eq!(MimeKind::from_file_name("trailing."), MimeKind::Unknown);
        assert_eq!(MimeKind::from_file_name(".html"), MimeKind::Unknown);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(MimeKind::Html.content_type(), "text/html");
        assert_eq!(MimeKind::Mp3.content_type(), "audio/mpeg");
        assert_eq!(MimeKind::Pdf.content_type(), "application/pdf");
        assert_eq!(MimeKind::Unknown.content_type(), "text/plain");
        assert_eq!(MimeKind::Gif.to_string(), "image/gif");
    }

    #[test]
    fn test_transfer_classification() {
        assert!(!MimeKind::Html.is_binary());
        assert!(!MimeKind::Unknown.is_binary());
        for kind in [MimeKind::Gif, MimeKind::Jpeg, MimeKind::Mp3, MimeKind::Pdf] {
            assert!(kind.is_binary());
        }
        assert!(MimeKind::Pdf.is_inline_attachment());
        assert!(MimeKind::Mp3.is_inline_attachment());
        assert!(!MimeKind::Gif.is_inline_attachment());
    }

    #[tokio::test]
    async fn test_root_serves_default_document() {
        let (dir, resolver) = site();
        let resolved = resolver.resolve(&get("/")).await.unwrap();
        assert_eq!(resolved.status, StatusCode::Ok);
        assert_eq!(resolved.mime, MimeKind::Html);
        assert_eq!(resolved.file_path, dir.path().join("index.html"));
        assert_eq!(resolved.file_name, "index.html");
    }

    #[tokio::test]
    async fn test_root_redirect_policy() {
        let (dir, resolver) = site();
        let resolver = resolver.with_root_policy(RootPolicy::Redirect);
        let resolved = resolver.resolve(&get("/")).await.unwrap();
        assert_eq!(resolved.status, StatusCode::MovedPermanently);
        assert_eq!(resolved.mime, MimeKind::Html);
        assert_eq!(resolved.file_path, dir.path().join("index.html"));
    }

    #[tokio::test]
    async fn test_root_does_not_touch_filesystem() {
        // The default document does not even exist here
        let dir = tempfile::tempdir().unwrap();
        let resolver = ResourceResolver::new(dir.path(), "home.html", "404.html");
        let resolved = resolver.resolve(&get("/")).await.unwrap();
        assert_eq!(resolved.status, StatusCode::Ok);
        assert_eq!(resolved.file_path, dir.path().join("home.html"));
    }

    #[tokio::test]
    async fn test_every_extension_present_and_absent() {
        let (dir, resolver) = site();
        for (extension, kind, _) in CONTENT_TYPES.iter() {
            let name = format!("name.{extension}");
            let path = format!("/{name}");

            let missing = resolver.resolve(&get(&path)).await.unwrap();
            assert_eq!(missing.status, StatusCode::NotFound);
            assert_eq!(missing.mime, MimeKind::Html);
            assert_eq!(missing.file_path, dir.path().join("404.html"));

            fs::write(dir.path().join(&name), b"data").unwrap();
            let present = resolver.resolve(&get(&path)).await.unwrap();
            assert_eq!(present.status, StatusCode::Ok);
            assert_eq!(present.mime, *kind);
            assert_eq!(present.file_path, dir.path().join(&name));
            assert_eq!(present.file_name, name);
        }
    }

    #[tokio::test]
    async fn test_unknown_extension_is_served() {
        let (dir, resolver) = site();
        fs::write(dir.path().join("notes.xyz"), "plain").unwrap();
        let resolved = resolver.resolve(&get("/notes.xyz")).await.unwrap();
        assert_eq!(resolved.status, StatusCode::Ok);
        assert_eq!(resolved.mime, MimeKind::Unknown);
    }

    #[tokio::test]
    async fn test_name_without_extension_is_checked_verbatim() {
        let (dir, resolver) = site();
        fs::write(dir.path().join("LICENSE"), "MIT").unwrap();
        let resolved = resolver.resolve(&get("/LICENSE")).await.unwrap();
        assert_eq!(resolved.status, StatusCode::Ok);
        assert_eq!(resolved.mime, MimeKind::Unknown);
        assert_eq!(resolved.file_path, dir.path().join("LICENSE"));
    }

    #[tokio::test]
    async fn test_nested_path() {
        let (dir, resolver) = site();
        fs::create_dir(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("img/logo.gif"), b"GIF89a").unwrap();
        let resolved = resolver.resolve(&get("/img/logo.gif")).await.unwrap();
        assert_eq!(resolved.status, StatusCode::Ok);
        assert_eq!(resolved.mime, MimeKind::Gif);
        assert_eq!(resolved.file_name, "img/logo.gif");
    }

    #[tokio::test]
    async fn test_directory_is_not_found() {
        let (dir, resolver) = site();
        fs::create_dir(dir.path().join("docs")).unwrap();
        let resolved = resolver.resolve(&get("/docs")).await.unwrap();
        assert_eq!(resolved.status, StatusCode::NotFound);
    }

    #[tokio::test]
    async fn test_paths_escaping_root_are_not_found() {
        let outer = tempfile::tempdir().unwrap();
        fs::write(outer.path().join("secret.html"), "secret").unwrap();
        let root = outer.path().join("www");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("404.html"), "missing").unwrap();
        let resolver = ResourceResolver::new(&root, "index.html", "404.html");

        for path in ["/../secret.html", "//etc/passwd", "/a/../../secret.html"] {
            let resolved = resolver.resolve(&get(path)).await.unwrap();
            assert_eq!(resolved.status, StatusCode::NotFound, "{path}");
            assert_eq!(resolved.file_path, root.join("404.html"));
        }
    }

    #[tokio::test]
    async fn test_relative_path_is_not_found() {
        let (dir, resolver) = site();
        let resolved = resolver.resolve(&get("index.html")).await.unwrap();
        assert_eq!(resolved.status, StatusCode::NotFound);
        assert_eq!(resolved.file_path, dir.path().join("404.html"));
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let (_dir, resolver) = site();
        let request = IncomingRequest::new("POST", "/index.html", "HTTP/1.1", Vec::new());
        let result = resolver.resolve(&request).await;
        assert!(matches!(result, Err(Error::UnsupportedMethod(ref m)) if m == "POST"));

        // Methods are matched exactly
        let request = IncomingRequest::new("get", "/", "HTTP/1.1", Vec::new());
        assert!(resolver.resolve(&request).await.is_err());
    }
}
