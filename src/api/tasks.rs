//! Task Calls
//!
//! CRUD against `/tasks` for the signed-in user. Mutations ignore the
//! response body; callers re-fetch the list afterwards.

use super::{decode, HttpClient};
use crate::error::ApiResult;
use crate::models::{NewTask, Task, TaskId, TaskUpdate};

pub async fn list_tasks(http: &HttpClient) -> ApiResult<Vec<Task>> {
    let response = http.get("/tasks").await?;
    decode(&response)
}

pub async fn create_task(http: &HttpClient, task: &NewTask) -> ApiResult<()> {
    http.post("/tasks", task).await?;
    Ok(())
}

pub async fn update_task(http: &HttpClient, id: TaskId, update: &TaskUpdate) -> ApiResult<()> {
    http.put(&format!("/tasks/{}", id), Some(update)).await?;
    Ok(())
}

pub async fn complete_task(http: &HttpClient, id: TaskId) -> ApiResult<()> {
    http.put::<()>(&format!("/tasks/{}/complete", id), None).await?;
    Ok(())
}

pub async fn delete_task(http: &HttpClient, id: TaskId) -> ApiResult<()> {
    http.delete(&format!("/tasks/{}", id)).await?;
    Ok(())
}
