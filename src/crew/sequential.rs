use async_trait::async_trait;
use tracing::info;

use crate::openai::{ChatMessage, OpenAiClient};
use crate::types::{AgentDefinition, Crew};

use super::{CrewError, CrewExecutor};

/// Production executor: one chat-completions call per task, in list order.
/// Outputs of earlier tasks ride along as conversation context for later
/// ones; the final task's output is the crew's result.
#[derive(Clone)]
pub struct SequentialExecutor {
    client: OpenAiClient,
}

impl SequentialExecutor {
    pub fn new(client: OpenAiClient) -> Self {
        Self { client }
    }
}

fn system_prompt(agent: &AgentDefinition) -> String {
    let mut prompt = format!(
        "You are {role}.\nYour goal: {goal}\nBackstory: {backstory}",
        role = agent.role,
        goal = agent.goal,
        backstory = agent.backstory,
    );
    if !agent.tools.is_empty() {
        prompt.push_str("\nTools available to you:");
        for tool in &agent.tools {
            prompt.push_str(&format!("\n- {}: {}", tool.name(), tool.description()));
        }
    }
    if agent.allow_delegation {
        prompt.push_str("\nYou may delegate parts of the work to your co-workers.");
    }
    prompt
}

#[async_trait]
impl CrewExecutor for SequentialExecutor {
    async fn execute(&self, crew: &Crew) -> Result<String, CrewError> {
        let total = crew.tasks.len();
        let mut outputs: Vec<String> = Vec::with_capacity(total);

        for (index, task) in crew.tasks.iter().enumerate() {
            let agent = crew.agent_for(task);
            info!(
                "Task {}/{} ({}): sending to model {}",
                index + 1,
                total,
                agent.role,
                self.client.model()
            );

            let mut messages = Vec::with_capacity(outputs.len() + 2);
            messages.push(ChatMessage::system(system_prompt(agent)));
            for output in &outputs {
                messages.push(ChatMessage::assistant(output.clone()));
            }
            messages.push(ChatMessage::user(task.description.clone()));

            let output = self.client.send_messages(messages).await?;
            info!("Task {}/{} ({}): completed", index + 1, total, agent.role);
            outputs.push(output);
        }

        outputs
            .pop()
            .ok_or_else(|| CrewError::Unexpected("crew has no tasks".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::crew::assemble::build_crew;
    use crate::test_support::stub_search_tool;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> Config {
        crate::test_support::test_config(base_url, "http://127.0.0.1:1")
    }

    fn sample_crew() -> Crew {
        build_crew(
            "Jane Doe\nSoftware Engineer",
            "Senior Engineer\n5 years experience",
            stub_search_tool(),
        )
    }

    #[tokio::test]
    async fn runs_one_request_per_task_and_returns_the_last_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "Dear Hiring Manager,"}}]
            })))
            .expect(2)
            .mount(&server)
            .await;

        let client = OpenAiClient::new(test_config(&server.uri())).unwrap();
        let executor = SequentialExecutor::new(client);
        let result = executor.execute(&sample_crew()).await.unwrap();
        assert_eq!(result, "Dear Hiring Manager,");
    }

    #[tokio::test]
    async fn api_failure_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiClient::new(test_config(&server.uri())).unwrap();
        let executor = SequentialExecutor::new(client);
        let err = executor.execute(&sample_crew()).await.unwrap_err();
        assert!(matches!(err, CrewError::Llm(_)));
    }

    #[test]
    fn system_prompt_carries_role_tools_and_delegation() {
        let crew = sample_crew();
        let analyst_prompt = system_prompt(&crew.agents[0]);
        assert!(analyst_prompt.contains("Resume Analyst"));
        assert!(analyst_prompt.contains("Scrape Google Searches"));
        assert!(!analyst_prompt.contains("delegate"));

        let writer_prompt = system_prompt(&crew.agents[1]);
        assert!(writer_prompt.contains("Professional Cover Letter Writer"));
        assert!(writer_prompt.contains("delegate"));
        assert!(!writer_prompt.contains("Tools available"));
    }
}
