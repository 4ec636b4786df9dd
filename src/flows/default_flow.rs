use crate::{
    services::llm::models::{base::InferenceOptions, chat::ChatRequest},
    Agent, AgentError, Message,
};

/// Single stateless chat call: system prompt plus the user prompt, one
/// model invocation, no tool-call loop and no carried history.
pub async fn default_flow(agent: &mut Agent, prompt: String) -> Result<Message, AgentError> {
    let messages = vec![
        Message::system(agent.system_prompt.clone()),
        Message::user(prompt),
    ];

    let options = InferenceOptions {
        temperature: agent.temperature,
        top_p: agent.top_p,
        num_predict: agent.max_tokens,
    };

    let request = ChatRequest {
        model: agent.model.clone(),
        messages,
        stream: Some(false),
        options: if options.is_empty() { None } else { Some(options) },
    };

    let response = agent.model_client.chat(request).await?;
    Ok(response.message)
}
