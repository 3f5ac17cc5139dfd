//! Parser behavior over the sample configurations
//!
//! Follows the testing guidelines: sources come from `tests/fixtures` through
//! `Fixtures`, and results are checked with `assert_servers`.

use rstest::rstest;
use servconf::testing::{assert_servers, Fixtures};
use servconf::{parse_str, ConfigLoader, LoadError};

#[test]
fn test_empty_file_has_no_servers() {
    let servers = Fixtures::parse("empty");
    assert_servers(&servers).server_count(0);
}

#[test]
fn test_basic_server_with_static_route() {
    let servers = Fixtures::parse("basic");

    assert_servers(&servers).server_count(1).server(0, |server| {
        server
            .port(8080)
            .name("example.com")
            .root_dir("/var/www")
            .route_count(1)
            .route(0, |route| {
                route
                    .path("/static")
                    .index_file("static.html")
                    .allowed_methods(&["GET", "HEAD"]);
            });
    });
}

#[test]
fn test_full_configuration() {
    let servers = Fixtures::parse("full");

    assert_servers(&servers)
        .server_count(2)
        .server(0, |server| {
            server
                .port(8080)
                .name("example.com")
                .root_dir("/var/www/example")
                .max_body_size(1_048_576)
                .default_file("index.html")
                .error_page_count(2)
                .error_page(404, "/errors/404.html")
                .error_page(500, "/errors/500.html")
                .allowed_methods(&["GET", "POST", "DELETE"])
                .route_count(3)
                .route(0, |route| {
                    route.path("/").autoindex("off").no_redirect();
                })
                .route(1, |route| {
                    route
                        .path("/uploads")
                        .root_dir("/srv/uploads")
                        .allowed_methods(&["POST", "DELETE"]);
                })
                .route(2, |route| {
                    route
                        .path("/old-blog")
                        .redirect(301, "https://blog.example.com/");
                });
        })
        .server(1, |server| {
            server
                .port(9090)
                .name("static.local")
                .root_dir("/srv/static")
                .error_page_count(0)
                .allowed_methods(&[])
                .route_count(1)
                .route(0, |route| {
                    route
                        .path("/files")
                        .autoindex("on")
                        .index_file("listing.html");
                });
        });
}

#[test]
fn test_last_write_wins() {
    let servers = Fixtures::parse("overrides");

    assert_servers(&servers).server_count(1).server(0, |server| {
        server
            .port(8080)
            .name("second")
            .error_page_count(1)
            .error_page(404, "/other.html")
            .allowed_methods(&["PUT"])
            .route(0, |route| {
                route.root_dir("/two").redirect(302, "/y");
            });
    });
}

#[test]
fn test_malformed_input_is_tolerated() {
    let servers = Fixtures::parse("malformed");

    assert_servers(&servers).server_count(1).server(0, |server| {
        server
            .port(0)
            .max_body_size(0)
            .error_page(0, "/oops.html")
            .name("tolerant")
            .route_count(1)
            .route(0, |route| {
                route.path("/never-closed").index_file("partial.html");
            });
    });
}

#[test]
fn test_unclosed_location_contributes_route() {
    let servers = parse_str("server {\n    listen 80\n    location /tail {\n        root /tail\n");

    assert_servers(&servers).server_count(1).server(0, |server| {
        server.port(80).route_count(1).route(0, |route| {
            route.path("/tail").root_dir("/tail");
        });
    });
}

#[test]
fn test_unknown_directive_changes_nothing() {
    let with_unknown = parse_str("server {\n    listen 80\n    foo bar\n}\n");
    let without = parse_str("server {\n    listen 80\n}\n");
    assert_eq!(with_unknown, without);
}

#[rstest]
#[case::listen("listen 8080", "listen 9090")]
#[case::server_name("server_name a", "server_name b")]
#[case::root("root /a", "root /b")]
#[case::body_size("client_max_body_size 1", "client_max_body_size 2")]
#[case::index("index a.html", "index b.html")]
#[case::error_page("error_page 404 /a", "error_page 404 /b")]
#[case::allow_methods("allow_methods GET", "allow_methods POST")]
fn test_second_directive_wins(#[case] first: &str, #[case] second: &str) {
    let both = parse_str(&format!("server {{\n{}\n{}\n}}\n", first, second));
    let only_second = parse_str(&format!("server {{\n{}\n}}\n", second));
    assert_eq!(both, only_second);
}

#[rstest]
#[case::spaces("server {\n    listen 80\n}\n")]
#[case::tabs("server {\n\t\tlisten 80\n}\n")]
#[case::trailing_whitespace("server { \t\n  listen 80  \n  }\t\n")]
#[case::crlf("server {\r\n    listen 80\r\n}\r\n")]
#[case::comments_and_blanks("# header\n\nserver {\n  # port\n\n  listen 80\n}\n# footer\n")]
fn test_layout_does_not_matter(#[case] source: &str) {
    let servers = parse_str(source);
    assert_servers(&servers).server_count(1).server(0, |server| {
        server.port(80);
    });
}

#[test]
fn test_reparse_is_deterministic() {
    for name in Fixtures::all() {
        let first = Fixtures::parse(&name);
        let second = Fixtures::parse(&name);
        assert_eq!(first, second, "fixture '{}' parsed differently twice", name);
    }
}

#[test]
fn test_reader_and_string_agree() {
    let loader = ConfigLoader::new();
    let source = Fixtures::source("full");
    assert_eq!(loader.parse(&source), loader.parse_reader(source.as_bytes()));
}

#[test]
fn test_missing_file_is_open_error() {
    let result = ConfigLoader::new().load(Fixtures::path("does-not-exist"));
    assert!(matches!(result, Err(LoadError::Open { .. })));
}

#[test]
fn test_route_resolution_over_fixture() {
    let servers = Fixtures::parse("full");
    let server = &servers[0];

    let uploads = server.match_route("/uploads/cat.png");
    assert_eq!(uploads.map(|r| r.path.as_str()), Some("/uploads"));
    assert_eq!(server.effective_root(uploads), Some("/srv/uploads"));
    assert_eq!(server.effective_index(uploads), Some("index.html"));
    assert_eq!(server.effective_methods(uploads), ["POST", "DELETE"]);

    let root = server.match_route("/about.html");
    assert_eq!(root.map(|r| r.path.as_str()), Some("/"));
    assert_eq!(server.effective_methods(root), ["GET", "POST", "DELETE"]);
    assert!(!root.unwrap().autoindex_enabled());
}
