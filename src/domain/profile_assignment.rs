use serde::{Deserialize, Serialize};

const GROUP_ASSIGNMENT_TARGET: &str = "#microsoft.graph.groupAssignmentTarget";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAssignment {
    pub id: String,
    pub target: AssignmentTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentTarget {
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
    pub group_id: Option<String>,
}

/// Assignments are addressed by a key derived from the profile and the group.
pub fn assignment_id(profile_id: &str, group_id: &str) -> String {
    format!("{}_{}_0", profile_id, group_id)
}

#[derive(Debug, PartialEq, Serialize)]
pub struct GroupAssignmentRequest {
    id: String,
    target: AssignmentTarget,
}

impl GroupAssignmentRequest {
    pub fn new(profile_id: &str, group_id: &str) -> Self {
        GroupAssignmentRequest {
            id: assignment_id(profile_id, group_id),
            target: AssignmentTarget {
                odata_type: GROUP_ASSIGNMENT_TARGET.to_string(),
                group_id: Some(group_id.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_uses_the_synthesized_assignment_id() {
        let request = GroupAssignmentRequest::new("profile", "group");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "id": "profile_group_0",
                "target": {
                    "@odata.type": "#microsoft.graph.groupAssignmentTarget",
                    "groupId": "group"
                }
            })
        );
    }
}
