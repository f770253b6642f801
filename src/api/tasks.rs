//! Task Endpoint Bindings
//!
//! Frontend bindings for the task-listing endpoint.

use crate::models::TaskRecord;

use super::{encode_query_value, fetch_json};

/// List the tasks belonging to a project
pub async fn list_tasks_for_project(base: &str, project: &str) -> Result<Vec<TaskRecord>, String> {
    let result = fetch_json(&task_list_url(base, project)).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

fn task_list_url(base: &str, project: &str) -> String {
    format!("{}/task/?project={}", base, encode_query_value(project))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_list_url() {
        assert_eq!(
            task_list_url("/admin/project", "3"),
            "/admin/project/task/?project=3"
        );
    }

    #[test]
    fn test_task_list_url_escapes_value() {
        assert_eq!(
            task_list_url("/admin/project", "a&b=c"),
            "/admin/project/task/?project=a%26b%3Dc"
        );
    }

    #[test]
    fn test_task_payload_decodes() {
        let tasks: Vec<TaskRecord> = serde_json::from_str(
            r#"[{"id": 11, "title": "Design doc"}, {"id": 12, "title": "Implementation"}]"#,
        )
        .unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, 11);
        assert_eq!(tasks[1].title, "Implementation");
    }
}
