//! Operations of the private pipelines API.

use crate::descriptor::QueryDescriptor;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const GET_PIPELINE_API_KEYS: &str = r#"
query getPipelineApiKeys($pipelineID: String!, $environmentID: String!) {
    getPipelineApiKeys(pipelineID: $pipelineID, environmentID: $environmentID) {
        triggerID
        apiKey
        apiKeyTail
        pipelineID
        environmentID
        expiresAt
    }
}
"#;

const GET_SINGLE_REMOTE_PROCESS_GROUP: &str = r#"
query getSingleRemoteProcessGroup($environmentID: String!, $remoteProcessGroupID: String!) {
    getSingleRemoteProcessGroup(environmentID: $environmentID, remoteProcessGroupID: $remoteProcessGroupID) {
        remoteProcessGroupID
        name
        description
        lb
        workerType
        language
        packages
        active
    }
}
"#;

/// Lists the API keys of a pipeline.
pub fn get_pipeline_api_keys() -> &'static QueryDescriptor {
    static DESCRIPTOR: OnceLock<QueryDescriptor> = OnceLock::new();
    DESCRIPTOR.get_or_init(|| {
        QueryDescriptor::parse(GET_PIPELINE_API_KEYS).expect("invalid `getPipelineApiKeys` document")
    })
}

/// Returns one remote process group of an environment.
pub fn get_single_remote_process_group() -> &'static QueryDescriptor {
    static DESCRIPTOR: OnceLock<QueryDescriptor> = OnceLock::new();
    DESCRIPTOR.get_or_init(|| {
        QueryDescriptor::parse(GET_SINGLE_REMOTE_PROCESS_GROUP)
            .expect("invalid `getSingleRemoteProcessGroup` document")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetPipelineApiKeysInput {
    #[serde(rename = "pipelineID")]
    pub pipeline_id: String,

    #[serde(rename = "environmentID")]
    pub environment_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineApiKey {
    #[serde(rename = "triggerID")]
    pub trigger_id: String,
    pub api_key: String,
    pub api_key_tail: String,
    #[serde(rename = "pipelineID")]
    pub pipeline_id: String,
    #[serde(rename = "environmentID")]
    pub environment_id: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetSingleRemoteProcessGroupInput {
    #[serde(rename = "environmentID")]
    pub environment_id: String,

    #[serde(rename = "remoteProcessGroupID")]
    pub remote_process_group_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProcessGroup {
    #[serde(rename = "remoteProcessGroupID")]
    pub remote_process_group_id: String,
    pub name: String,
    pub description: String,
    pub lb: String,
    pub worker_type: String,
    pub language: String,
    pub packages: String,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variables;
    use serde_json::json;

    #[test]
    fn pipeline_api_keys_descriptor_test() {
        let descriptor = get_pipeline_api_keys();

        assert_eq!(descriptor.operation_name(), Some("getPipelineApiKeys"));
        assert_eq!(descriptor.root_field(), "getPipelineApiKeys");

        let input = GetPipelineApiKeysInput {
            pipeline_id: "p1".to_owned(),
            environment_id: "e1".to_owned(),
        };
        let variables = Variables::from_serialize(&input).unwrap();
        assert_eq!(descriptor.validate(&variables), Ok(()));
    }

    #[test]
    fn remote_process_group_descriptor_test() {
        let descriptor = get_single_remote_process_group();

        assert_eq!(descriptor.root_field(), "getSingleRemoteProcessGroup");

        let input = GetSingleRemoteProcessGroupInput {
            environment_id: "e1".to_owned(),
            remote_process_group_id: "rpg1".to_owned(),
        };
        let variables = Variables::from_serialize(&input).unwrap();
        assert_eq!(descriptor.validate(&variables), Ok(()));
    }

    #[test]
    fn payload_field_names_test() {
        let key: PipelineApiKey = serde_json::from_value(json!({
            "triggerID": "t1",
            "apiKey": "k1",
            "apiKeyTail": "y1",
            "pipelineID": "p1",
            "environmentID": "e1",
            "expiresAt": null
        }))
        .unwrap();
        assert_eq!(key.trigger_id, "t1");
        assert_eq!(key.expires_at, None);

        let group: RemoteProcessGroup = serde_json::from_value(json!({
            "remoteProcessGroupID": "rpg1",
            "name": "python workers",
            "description": "",
            "lb": "roundrobin",
            "workerType": "vm",
            "language": "Python",
            "packages": "pandas",
            "active": true
        }))
        .unwrap();
        assert_eq!(group.worker_type, "vm");
        assert!(group.active);
    }
}
