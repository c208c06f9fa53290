// src/application/handlers/material_handlers.rs

use axum::extract::multipart::{Multipart, MultipartError};
use axum::extract::rejection::{FormRejection, JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Form, Json};

use crate::application::dto::{AddUrlMaterialDto, CreateMaterialDto, MaterialDto, TopicDto};
use crate::application::state::AppState;
use crate::error::{AppError, AppResult};
use crate::services::UploadedFile;

/// Run a synchronous service call on the blocking pool
async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Other(format!("Blocking task failed: {}", e)))?
}

/// Fields collected from an upload form
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    title: Option<String>,
    material_type: Option<String>,
}

impl UploadForm {
    fn require_file(&mut self) -> AppResult<UploadedFile> {
        self.file.take().ok_or_else(|| missing_field("file"))
    }

    fn require_title(&mut self) -> AppResult<String> {
        self.title.take().ok_or_else(|| missing_field("title"))
    }

    fn require_material_type(&mut self) -> AppResult<String> {
        self.material_type
            .take()
            .ok_or_else(|| missing_field("materialType"))
    }
}

fn missing_field(name: &str) -> AppError {
    AppError::Validation(format!("Missing form field '{}'", name))
}

/// Body-limit hits keep their 413; every other multipart failure is a bad request
fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Multipart error: {}", e.body_text()))
    }
}

/// Read `file`, `title` and `materialType` out of a multipart body.
/// Unknown fields are ignored.
async fn read_upload_form(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().map(|n| n.to_string());
        match field_name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(|n| n.to_string());
                let bytes = field.bytes().await.map_err(multipart_error)?.to_vec();
                form.file = Some(UploadedFile { file_name, bytes });
            }
            Some("title") => {
                form.title = Some(field.text().await.map_err(multipart_error)?);
            }
            Some("materialType") => {
                form.material_type = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Upload a file of any type to a topic
pub async fn upload_material(
    State(state): State<AppState>,
    Path(topic_id): Path<i64>,
    multipart: Multipart,
) -> AppResult<Json<MaterialDto>> {
    let mut form = read_upload_form(multipart).await?;
    let file = form.require_file()?;
    let title = form.require_title()?;
    let material_type = form.require_material_type()?;

    let material = run_blocking(move || {
        state
            .ingestion_service
            .upload_material(topic_id, file, title, &material_type)
    })
    .await?;

    Ok(Json(material.into()))
}

/// Upload a PDF to a topic
pub async fn upload_pdf(
    State(state): State<AppState>,
    Path(topic_id): Path<i64>,
    multipart: Multipart,
) -> AppResult<Json<MaterialDto>> {
    let mut form = read_upload_form(multipart).await?;
    let file = form.require_file()?;
    let title = form.require_title()?;

    let material =
        run_blocking(move || state.ingestion_service.upload_pdf(topic_id, file, title)).await?;

    Ok(Json(material.into()))
}

/// Attach an external link to a topic.
///
/// `title` and `url` are read from the urlencoded body, the query string, or both.
pub async fn add_url_material(
    State(state): State<AppState>,
    Path(topic_id): Path<i64>,
    query: Result<Query<AddUrlMaterialDto>, QueryRejection>,
    form: Result<Form<AddUrlMaterialDto>, FormRejection>,
) -> AppResult<Json<MaterialDto>> {
    let Query(from_query) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let from_body = match form {
        Ok(Form(dto)) => dto,
        // No urlencoded body: query-only request
        Err(FormRejection::InvalidFormContentType(_)) => AddUrlMaterialDto::default(),
        Err(e) => return Err(AppError::Validation(e.body_text())),
    };

    let dto = from_body.or(from_query);
    let title = dto.title.ok_or_else(|| missing_field("title"))?;
    let url = dto.url.ok_or_else(|| missing_field("url"))?;

    let material = run_blocking(move || {
        state
            .ingestion_service
            .add_url_material(topic_id, title, url)
    })
    .await?;

    Ok(Json(material.into()))
}

/// Attach a caller-built material to a topic
pub async fn add_material(
    State(state): State<AppState>,
    Path(topic_id): Path<i64>,
    body: Result<Json<CreateMaterialDto>, JsonRejection>,
) -> AppResult<Json<MaterialDto>> {
    let Json(dto) = body.map_err(|e| AppError::Validation(e.body_text()))?;

    let material =
        run_blocking(move || state.ingestion_service.add_material(topic_id, dto.into())).await?;

    Ok(Json(material.into()))
}

pub async fn list_materials(State(state): State<AppState>) -> AppResult<Json<Vec<MaterialDto>>> {
    let materials = run_blocking(move || state.query_service.get_all_materials()).await?;
    Ok(Json(materials.into_iter().map(MaterialDto::from).collect()))
}

pub async fn get_material(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MaterialDto>> {
    let material = run_blocking(move || state.query_service.get_material_by_id(id)).await?;
    Ok(Json(material.into()))
}

pub async fn list_materials_by_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<i64>,
) -> AppResult<Json<Vec<MaterialDto>>> {
    let materials =
        run_blocking(move || state.query_service.get_materials_by_topic(topic_id)).await?;
    Ok(Json(materials.into_iter().map(MaterialDto::from).collect()))
}

/// Idempotent: unknown ids answer 200 as well
pub async fn delete_material(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    run_blocking(move || state.query_service.delete_material(id)).await?;
    Ok(StatusCode::OK)
}

pub async fn get_material_topic(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<TopicDto>> {
    let topic = run_blocking(move || state.query_service.get_material_topic(id)).await?;
    Ok(Json(topic.into()))
}
