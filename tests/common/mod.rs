use std::path::PathBuf;

/// Frozen "now" used by every integration test; ages below are relative to it.
#[allow(dead_code)]
pub const NOW: &str = "2025-09-01T12:00:00Z";

/// Snapshot fixture in the GraphQL envelope shape the fetch step produces.
///
/// - PR 101: three approvals plus one open request; 7 days old.
/// - PR 102: commented + changes requested, reviewer also still requested; 3 days old.
/// - PR 103: no author, no reviewers; fresh.
/// - PR 104: draft with one approval resolved out of comment+approve; 6 days old.
#[allow(dead_code)]
pub fn fixture_snapshot() -> serde_json::Value {
  serde_json::json!({
    "data": {
      "repository": {
        "pullRequests": {
          "nodes": [
            {
              "number": 101,
              "title": "OCMUI-101: add cluster quota table",
              "createdAt": "2025-08-25T09:00:00Z",
              "isDraft": false,
              "author": {"login": "dev1", "name": "Dev One"},
              "reviewRequests": {"nodes": [
                {"requestedReviewer": {"login": "erin"}}
              ]},
              "reviews": {"nodes": [
                {"state": "APPROVED", "author": {"login": "bob"}},
                {"state": "APPROVED", "author": {"login": "carol", "name": "Carol C"}},
                {"state": "APPROVED", "author": {"login": "dave"}}
              ]}
            },
            {
              "number": 102,
              "title": "Fix OCMUI-42 and OCMUI-42 again, also OCMUI-7",
              "createdAt": "2025-08-29T11:00:00Z",
              "isDraft": false,
              "author": {"login": "dev2"},
              "reviewRequests": {"nodes": [
                {"requestedReviewer": {"login": "frank"}},
                {"requestedReviewer": {"name": "platform-team"}}
              ]},
              "reviews": {"nodes": [
                {"state": "COMMENTED", "author": {"login": "frank"}},
                {"state": "CHANGES_REQUESTED", "author": {"login": "gina"}}
              ]}
            },
            {
              "number": 103,
              "title": "chore: bump deps",
              "createdAt": "2025-08-31T13:00:00Z",
              "isDraft": false
            },
            {
              "number": 104,
              "title": "OCMUI-9: experiment",
              "createdAt": "2025-08-26T11:59:00Z",
              "isDraft": true,
              "author": {"login": "dev1", "name": "Dev One"},
              "reviews": {"nodes": [
                {"state": "COMMENTED", "author": {"login": "alice"}},
                {"state": "APPROVED", "author": {"login": "alice"}}
              ]}
            }
          ]
        }
      }
    }
  })
}

#[allow(dead_code)]
pub fn write_snapshot(dir: &tempfile::TempDir, value: &serde_json::Value) -> PathBuf {
  let path = dir.path().join("snapshot.json");
  std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
  path
}
