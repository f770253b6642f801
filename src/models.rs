//! Frontend Models
//!
//! Data structures matching the admin backend's JSON payloads.

use serde::{Deserialize, Serialize};

/// Project row as embedded by the host change form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
}

/// Task row as served by the task-listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: u32,
    pub title: String,
}

/// Team member as served by the fetch-team-members endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub username: String,
}

/// Envelope around the fetch-team-members response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMembersResponse {
    pub team_members: Vec<TeamMember>,
}
