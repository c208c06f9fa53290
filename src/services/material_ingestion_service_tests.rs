// src/services/material_ingestion_service_tests.rs
//
// Ingestion workflow tests
//
// PURPOSE:
// - Prove each creation path honours its own preconditions
// - Prove type resolution and folder choice on upload
// - Prove nothing is persisted when a path rejects its input
// - Prove what was created can be read back unchanged

#[cfg(test)]
mod sqlite_backed_tests {
    use std::sync::Arc;

    use crate::db::{create_memory_pool, initialize_database};
    use crate::domain::material::MaterialType;
    use crate::domain::topic::Topic;
    use crate::error::AppError;
    use crate::infrastructure::LocalFileStorage;
    use crate::repositories::{
        MaterialRepository, SqliteMaterialRepository, SqliteTopicRepository, TopicRepository,
    };
    use crate::services::{
        MaterialIngestionService, MaterialPayload, MaterialQueryService, UploadedFile,
    };

    struct Fixture {
        ingestion: MaterialIngestionService,
        query: MaterialQueryService,
        materials: Arc<SqliteMaterialRepository>,
        topic: Topic,
        upload_root: tempfile::TempDir,
    }

    fn fixture() -> Fixture {
        let pool = Arc::new(create_memory_pool().unwrap());
        initialize_database(&pool.get().unwrap()).unwrap();

        let materials = Arc::new(SqliteMaterialRepository::new(pool.clone()));
        let topics = Arc::new(SqliteTopicRepository::new(pool));
        let topic = topics.insert("Ownership and borrowing").unwrap();

        let upload_root = tempfile::tempdir().unwrap();
        let storage = Arc::new(LocalFileStorage::new(upload_root.path().to_path_buf()).unwrap());

        Fixture {
            ingestion: MaterialIngestionService::new(materials.clone(), topics.clone(), storage),
            query: MaterialQueryService::new(materials.clone(), topics),
            materials,
            topic,
            upload_root,
        }
    }

    fn file(name: &str, bytes: &[u8]) -> UploadedFile {
        UploadedFile {
            file_name: Some(name.to_string()),
            bytes: bytes.to_vec(),
        }
    }

    fn stored_files(f: &Fixture, folder: &str) -> usize {
        match std::fs::read_dir(f.upload_root.path().join(folder)) {
            Ok(entries) => entries.count(),
            Err(_) => 0,
        }
    }

    #[test]
    fn test_url_material_keeps_url_verbatim() {
        let f = fixture();
        let url = "  https://example.com/a b?c=d#frag  ".to_string();

        let material = f
            .ingestion
            .add_url_material(f.topic.id, "Reference".to_string(), url.clone())
            .unwrap();

        assert_eq!(material.material_type, MaterialType::Url);
        assert_eq!(material.content_url, url);
        assert_eq!(material.topic_id, f.topic.id);
    }

    #[test]
    fn test_upload_with_unknown_type_defaults_to_pdf() {
        let f = fixture();

        let material = f
            .ingestion
            .upload_material(
                f.topic.id,
                file("notes.bin", b"some bytes"),
                "Notes".to_string(),
                "FOO",
            )
            .unwrap();

        assert_eq!(material.material_type, MaterialType::Pdf);
        assert!(material.content_url.starts_with("/uploads/pdfs/"));
        assert_eq!(stored_files(&f, "pdfs"), 1);
    }

    #[test]
    fn test_upload_resolves_type_case_insensitively() {
        let f = fixture();

        let material = f
            .ingestion
            .upload_material(
                f.topic.id,
                file("lecture1.mp4", b"twelve bytes"),
                "Lecture 1".to_string(),
                "video",
            )
            .unwrap();

        assert_eq!(material.material_type, MaterialType::Video);
        assert!(material.content_url.starts_with("/uploads/videos/"));
        assert!(material.content_url.ends_with("_lecture1.mp4"));
        assert_eq!(material.title, "Lecture 1");
    }

    #[test]
    fn test_upload_pdf_shorthand() {
        let f = fixture();

        let material = f
            .ingestion
            .upload_pdf(f.topic.id, file("week1.pdf", b"%PDF"), "Week 1".to_string())
            .unwrap();

        assert_eq!(material.material_type, MaterialType::Pdf);
        assert!(material.content_url.starts_with("/uploads/pdfs/"));
    }

    #[test]
    fn test_empty_upload_is_rejected_and_nothing_persisted() {
        let f = fixture();

        let result = f.ingestion.upload_material(
            f.topic.id,
            file("empty.pdf", b""),
            "Empty".to_string(),
            "PDF",
        );

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(f.materials.list_all().unwrap().is_empty());
        assert_eq!(stored_files(&f, "pdfs"), 0);
    }

    #[test]
    fn test_payload_without_type_is_rejected_and_nothing_persisted() {
        let f = fixture();

        let result = f.ingestion.add_material(
            f.topic.id,
            MaterialPayload {
                title: "Untyped".to_string(),
                material_type: None,
                content_url: "https://example.com".to_string(),
            },
        );

        match result {
            Err(AppError::Validation(msg)) => assert!(msg.contains("materialType")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
        assert!(f.materials.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_payload_with_type_is_persisted_as_given() {
        let f = fixture();

        let material = f
            .ingestion
            .add_material(
                f.topic.id,
                MaterialPayload {
                    title: "Diagram".to_string(),
                    material_type: Some(MaterialType::Image),
                    content_url: "data:image/png;base64,iVBORw0KGgo=".to_string(),
                },
            )
            .unwrap();

        assert_eq!(material.material_type, MaterialType::Image);
        assert_eq!(material.content_url, "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_unknown_topic_is_not_found_on_every_path() {
        let f = fixture();
        let missing = f.topic.id + 1000;

        let by_url = f.ingestion.add_url_material(
            missing,
            "Link".to_string(),
            "https://example.com".to_string(),
        );
        let by_payload = f.ingestion.add_material(
            missing,
            MaterialPayload {
                title: "Payload".to_string(),
                material_type: Some(MaterialType::Pdf),
                content_url: "/uploads/pdfs/x.pdf".to_string(),
            },
        );
        let by_upload = f.ingestion.upload_material(
            missing,
            file("x.pdf", b"bytes"),
            "Upload".to_string(),
            "pdf",
        );

        assert!(matches!(by_url, Err(AppError::NotFound(_))));
        assert!(matches!(by_payload, Err(AppError::NotFound(_))));
        assert!(matches!(by_upload, Err(AppError::NotFound(_))));
        assert!(f.materials.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_empty_title_violates_invariant() {
        let f = fixture();

        let result = f.ingestion.add_url_material(
            f.topic.id,
            String::new(),
            "https://example.com".to_string(),
        );

        assert!(matches!(result, Err(AppError::Domain(_))));
        assert!(f.materials.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_title_is_taken_as_is() {
        let f = fixture();

        let material = f
            .ingestion
            .upload_material(f.topic.id, file("notes.pdf", b"abc"), "   ".to_string(), "pdf")
            .unwrap();

        assert_eq!(material.title, "   ");
        assert_eq!(stored_files(&f, "pdfs"), 1);
    }

    #[test]
    fn test_upload_with_empty_title_stores_nothing() {
        let f = fixture();

        let result = f.ingestion.upload_material(
            f.topic.id,
            file("notes.pdf", b"abc"),
            String::new(),
            "pdf",
        );

        assert!(matches!(result, Err(AppError::Domain(_))));
        assert!(f.materials.list_all().unwrap().is_empty());
        assert_eq!(stored_files(&f, "pdfs"), 0);
    }

    #[test]
    fn test_round_trip_through_every_path() {
        let f = fixture();

        let created = vec![
            f.ingestion
                .upload_material(
                    f.topic.id,
                    file("a.png", b"\x89PNG"),
                    "Image".to_string(),
                    "image",
                )
                .unwrap(),
            f.ingestion
                .add_url_material(
                    f.topic.id,
                    "Link".to_string(),
                    "https://doc.rust-lang.org".to_string(),
                )
                .unwrap(),
            f.ingestion
                .add_material(
                    f.topic.id,
                    MaterialPayload {
                        title: "Payload".to_string(),
                        material_type: Some(MaterialType::Video),
                        content_url: "https://videos.example.com/1".to_string(),
                    },
                )
                .unwrap(),
        ];

        for material in &created {
            let fetched = f.query.get_material_by_id(material.id).unwrap();
            assert_eq!(fetched.title, material.title);
            assert_eq!(fetched.material_type, material.material_type);
            assert_eq!(fetched.content_url, material.content_url);
        }

        assert_eq!(f.query.get_materials_by_topic(f.topic.id).unwrap().len(), 3);
    }
}

#[cfg(test)]
mod collaborator_tests {
    use std::sync::Arc;

    use mockall::predicate::eq;

    use crate::domain::material::MaterialType;
    use crate::domain::topic::Topic;
    use crate::error::AppError;
    use crate::infrastructure::MockFileStorage;
    use crate::repositories::{MockMaterialRepository, MockTopicRepository};
    use crate::services::{MaterialIngestionService, UploadedFile};

    fn topic_repo_with(topic_id: i64) -> MockTopicRepository {
        let mut topics = MockTopicRepository::new();
        topics.expect_get_by_id().with(eq(topic_id)).returning(|id| {
            Ok(Some(Topic {
                id,
                title: "Topic".to_string(),
            }))
        });
        topics
    }

    fn twelve_bytes() -> UploadedFile {
        UploadedFile {
            file_name: Some("lecture1.mp4".to_string()),
            bytes: b"0123456789ab".to_vec(),
        }
    }

    /// Upload {topic 5, 12 bytes, "Lecture 1", "video"} goes to folder
    /// "videos" and persists the locator storage returned.
    #[test]
    fn test_upload_scenario_uses_videos_folder_and_locator() {
        let mut storage = MockFileStorage::new();
        storage
            .expect_store()
            .withf(|bytes, folder, name| {
                bytes.len() == 12 && folder == "videos" && name == "lecture1.mp4"
            })
            .times(1)
            .returning(|_, _, _| Ok("/videos/lecture1.mp4".to_string()));

        let mut materials = MockMaterialRepository::new();
        materials
            .expect_insert()
            .withf(|draft| {
                draft.topic_id == 5
                    && draft.material.title == "Lecture 1"
                    && draft.material.material_type == MaterialType::Video
                    && draft.material.content_url == "/videos/lecture1.mp4"
            })
            .times(1)
            .returning(|draft| Ok(draft.clone().into_material(1)));

        let service = MaterialIngestionService::new(
            Arc::new(materials),
            Arc::new(topic_repo_with(5)),
            Arc::new(storage),
        );

        let material = service
            .upload_material(5, twelve_bytes(), "Lecture 1".to_string(), "video")
            .unwrap();

        assert_eq!(material.id, 1);
        assert_eq!(material.topic_id, 5);
        assert_eq!(material.material_type, MaterialType::Video);
        assert_eq!(material.content_url, "/videos/lecture1.mp4");
    }

    #[test]
    fn test_unnamed_upload_gets_default_name() {
        let mut storage = MockFileStorage::new();
        storage
            .expect_store()
            .withf(|_, folder, name| folder == "images" && name == "upload")
            .times(1)
            .returning(|_, _, _| Ok("/uploads/images/x_upload".to_string()));

        let mut materials = MockMaterialRepository::new();
        materials
            .expect_insert()
            .returning(|draft| Ok(draft.clone().into_material(3)));

        let service = MaterialIngestionService::new(
            Arc::new(materials),
            Arc::new(topic_repo_with(1)),
            Arc::new(storage),
        );

        let file = UploadedFile {
            file_name: None,
            bytes: vec![1, 2, 3],
        };
        let material = service
            .upload_material(1, file, "Photo".to_string(), "IMAGE")
            .unwrap();
        assert_eq!(material.material_type, MaterialType::Image);
    }

    #[test]
    fn test_storage_failure_is_server_error_and_skips_insert() {
        let mut storage = MockFileStorage::new();
        storage
            .expect_store()
            .returning(|_, _, _| Err(AppError::Io(std::io::Error::other("disk full"))));

        let mut materials = MockMaterialRepository::new();
        materials.expect_insert().never();

        let mut topics = MockTopicRepository::new();
        topics.expect_get_by_id().never();

        let service =
            MaterialIngestionService::new(Arc::new(materials), Arc::new(topics), Arc::new(storage));

        let result = service.upload_material(5, twelve_bytes(), "Lecture 1".to_string(), "video");

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
        assert!(!err.is_client_error());
    }

    /// The stored file stays behind when the insert fails; no cleanup is attempted.
    #[test]
    fn test_insert_failure_after_store_is_propagated() {
        let mut storage = MockFileStorage::new();
        storage
            .expect_store()
            .times(1)
            .returning(|_, _, _| Ok("/uploads/videos/abc_lecture1.mp4".to_string()));

        let mut materials = MockMaterialRepository::new();
        materials
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::Pool("timed out".to_string())));

        let service = MaterialIngestionService::new(
            Arc::new(materials),
            Arc::new(topic_repo_with(5)),
            Arc::new(storage),
        );

        let result = service.upload_material(5, twelve_bytes(), "Lecture 1".to_string(), "video");
        assert!(matches!(result, Err(AppError::Pool(_))));
    }

    #[test]
    fn test_empty_upload_never_reaches_storage() {
        let mut storage = MockFileStorage::new();
        storage.expect_store().never();

        let service = MaterialIngestionService::new(
            Arc::new(MockMaterialRepository::new()),
            Arc::new(MockTopicRepository::new()),
            Arc::new(storage),
        );

        let file = UploadedFile {
            file_name: Some("empty.pdf".to_string()),
            bytes: Vec::new(),
        };
        let result = service.upload_pdf(5, file, "Empty".to_string());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_untitled_upload_never_reaches_storage() {
        let mut storage = MockFileStorage::new();
        storage.expect_store().never();

        let service = MaterialIngestionService::new(
            Arc::new(MockMaterialRepository::new()),
            Arc::new(MockTopicRepository::new()),
            Arc::new(storage),
        );

        let result = service.upload_material(5, twelve_bytes(), String::new(), "video");
        assert!(matches!(result, Err(AppError::Domain(_))));
    }
}
