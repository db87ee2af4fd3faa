use crate::payload::Payload;

/// Markdown table describing a remote test execution.
pub fn render_execution_summary(payload: &Payload) -> String {
    let (emoji, status) = if payload.success {
        ("✅", "SUCCESS")
    } else {
        ("❌", "FAILURE")
    };

    format!(
        "## {emoji} External Test Results: {status}\n\
         \n\
         ### 📍 Execution Details\n\
         | Property | Value |\n\
         | :--- | :--- |\n\
         | **Source** | {source} |\n\
         | **Branch** | `{branch}` |\n\
         | **Commit** | `{commit}` |\n\
         | **Artifact Name** | {artifact} |\n",
        source = payload.source,
        branch = payload.branch,
        commit = payload.commit,
        artifact = payload.artifact_name,
    )
}
