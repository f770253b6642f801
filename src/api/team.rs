//! Team Member Endpoint Bindings
//!
//! Frontend bindings for the fetch-team-members endpoint. The endpoint
//! answers 400 when no project id is given and 404 for an unknown project;
//! both surface here as plain `Err` values.

use crate::models::{TeamMember, TeamMembersResponse};

use super::{encode_query_value, fetch_json};

/// List the team members assigned to a project
pub async fn list_team_members_for_project(
    base: &str,
    project: &str,
) -> Result<Vec<TeamMember>, String> {
    let result = fetch_json(&team_members_url(base, project)).await?;
    let response: TeamMembersResponse =
        serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())?;
    Ok(response.team_members)
}

fn team_members_url(base: &str, project: &str) -> String {
    format!(
        "{}/task/fetch-team-members/?project_id={}",
        base,
        encode_query_value(project)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_members_url() {
        assert_eq!(
            team_members_url("/admin/project", "7"),
            "/admin/project/task/fetch-team-members/?project_id=7"
        );
    }

    #[test]
    fn test_team_members_envelope_decodes() {
        let response: TeamMembersResponse = serde_json::from_str(
            r#"{"team_members": [{"id": 4, "username": "asha"}, {"id": 9, "username": "lee"}]}"#,
        )
        .unwrap();
        assert_eq!(response.team_members.len(), 2);
        assert_eq!(response.team_members[0].username, "asha");
    }
}
