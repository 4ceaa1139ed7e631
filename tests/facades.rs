use box_content_sdk::{BoxConfig, BoxRequest, BoxSession};
use reqwest::blocking::Client;
use reqwest::Method;
use std::io::Cursor;

fn example_session() -> BoxSession {
    let config = BoxConfig::new("https://api.example.com/2.0", "https://upload.example.com/2.0")
        .unwrap();
    BoxSession::with_config(&config, "token").unwrap()
}

#[test]
fn create_reports_folder() {
    let session = example_session();
    let request = session.folder_api().create_request("0", "Reports").unwrap();
    assert_eq!(request.url(), "https://api.example.com/2.0/folders");

    let built = request.builder(&Client::new()).build().unwrap();
    assert_eq!(built.method(), Method::POST);
    let body: serde_json::Value =
        serde_json::from_slice(built.body().and_then(|b| b.as_bytes()).unwrap()).unwrap();
    assert_eq!(body["parent"]["id"], "0");
    assert_eq!(body["name"], "Reports");
}

#[test]
fn every_endpoint_url() {
    let session = example_session();
    let files = session.file_api();
    let folders = session.folder_api();
    let users = session.user_api();
    let mut sink: Vec<u8> = Vec::new();

    let cases = vec![
        (
            files.info_request("42").unwrap().url().to_string(),
            "https://api.example.com/2.0/files/42",
        ),
        (
            files
                .upload_request(Cursor::new(b"x".to_vec()), "x.txt", "0")
                .unwrap()
                .url()
                .to_string(),
            "https://upload.example.com/2.0/files/content",
        ),
        (
            files
                .upload_new_version_request(Cursor::new(b"x".to_vec()), "42")
                .unwrap()
                .url()
                .to_string(),
            "https://upload.example.com/2.0/files/42/content",
        ),
        (
            files.download_request(&mut sink, "42").unwrap().url().to_string(),
            "https://api.example.com/2.0/files/42/content",
        ),
        (
            folders.info_request("7").unwrap().url().to_string(),
            "https://api.example.com/2.0/folders/7",
        ),
        (
            folders.items_request("7").unwrap().url().to_string(),
            "https://api.example.com/2.0/folders/7/items",
        ),
        (
            users.current_user_info_request().url().to_string(),
            "https://api.example.com/2.0/users/me",
        ),
    ];

    for (actual, expected) in cases {
        assert_eq!(actual, expected);
    }
}

#[test]
fn facades_share_one_session_across_threads() {
    let session = example_session();
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["1", "2", "3"]
            .into_iter()
            .map(|id| {
                let session = &session;
                scope.spawn(move || session.file_api().info_request(id).unwrap().url().to_string())
            })
            .collect();
        for (handle, id) in handles.into_iter().zip(["1", "2", "3"]) {
            assert_eq!(
                handle.join().unwrap(),
                format!("https://api.example.com/2.0/files/{id}")
            );
        }
    });
}
