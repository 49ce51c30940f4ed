use timbre::domain::{StoragePath, UploadId};

#[test]
fn given_filename_with_extension_when_creating_path_then_keeps_lowercased_extension() {
    let id = UploadId::new();
    let path = StoragePath::new(&id, Some("Recording.WAV"));

    assert_eq!(path.as_str(), format!("{}.wav", id.as_uuid()));
}

#[test]
fn given_no_filename_when_creating_path_then_uses_bare_uuid() {
    let id = UploadId::new();
    let path = StoragePath::new(&id, None);

    assert_eq!(path.as_str(), id.as_uuid().to_string());
}

#[test]
fn given_traversal_filename_when_creating_path_then_client_name_is_dropped() {
    let id = UploadId::new();
    let path = StoragePath::new(&id, Some("../../etc/passwd"));

    assert_eq!(path.as_str(), id.as_uuid().to_string());
}

#[test]
fn given_suspicious_extensions_when_creating_path_then_extension_is_dropped() {
    let id = UploadId::new();
    for name in [".bashrc", "clip.", "clip.wav/x", "clip.verylongextension", "clip.w v"] {
        let path = StoragePath::new(&id, Some(name));
        assert_eq!(path.as_str(), id.as_uuid().to_string(), "filename {:?}", name);
    }
}

#[test]
fn given_two_uploads_with_same_filename_when_creating_paths_then_paths_differ() {
    let path_a = StoragePath::new(&UploadId::new(), Some("clip.mp3"));
    let path_b = StoragePath::new(&UploadId::new(), Some("clip.mp3"));

    assert_ne!(path_a, path_b);
}

#[test]
fn given_storage_path_when_displayed_then_matches_as_str() {
    let path = StoragePath::new(&UploadId::new(), Some("clip.ogg"));

    assert_eq!(format!("{}", path), path.as_str());
}
