use crate::tools::ToolHandle;
use crate::types::{AgentDefinition, Crew, ExecutionOrder, TaskDefinition};

/// Resume analyst: search-capable, never delegates.
pub fn resume_analyst(search_tool: ToolHandle) -> AgentDefinition {
    AgentDefinition {
        role: "Resume Analyst".to_string(),
        goal: "Analyze resumes and provide specific, actionable feedback based on the job description."
            .to_string(),
        backstory: "You are an expert in resume optimization. You help job seekers align their \
                    resumes with specific job descriptions, suggesting relevant skills, projects, \
                    and language enhancements to maximize their chances of success."
            .to_string(),
        tools: vec![search_tool],
        allow_delegation: false,
    }
}

/// Cover-letter writer: no tools of its own, delegation allowed.
pub fn cover_letter_writer() -> AgentDefinition {
    AgentDefinition {
        role: "Professional Cover Letter Writer".to_string(),
        goal: "Generate professional and tailored cover letters that align resumes with job descriptions."
            .to_string(),
        backstory: "You are an experienced cover letter writer who crafts personalized, compelling \
                    letters. You analyze the provided resume and job description to create tailored \
                    bullet points and a cohesive narrative."
            .to_string(),
        tools: Vec::new(),
        allow_delegation: true,
    }
}

fn analysis_prompt(resume: &str, job_description: &str) -> String {
    format!(
        "Analyze the following resume and provide a critique based on the job description:\n\n\
         Resume:\n{resume}\n\n\
         Job Description:\n{job_description}\n\n\
         Highlight missing skills, suggest improvements, and ensure alignment with the job role."
    )
}

fn cover_letter_prompt(resume: &str, job_description: &str) -> String {
    format!(
        "Create a professional cover letter based on the following resume and job description:\n\n\
         Resume:\n{resume}\n\n\
         Job Description:\n{job_description}\n\n\
         Align the resume's points with job requirements and ensure a compelling narrative."
    )
}

/// Build the two agents and their tasks. Both prompts are filled up front
/// from the same two source texts; the analysis task always comes first.
/// Callers must have verified that both texts are non-empty.
pub fn build_crew(resume: &str, job_description: &str, search_tool: ToolHandle) -> Crew {
    let agents = vec![resume_analyst(search_tool), cover_letter_writer()];
    let tasks = vec![
        TaskDefinition {
            description: analysis_prompt(resume, job_description),
            agent: 0,
        },
        TaskDefinition {
            description: cover_letter_prompt(resume, job_description),
            agent: 1,
        },
    ];
    Crew {
        agents,
        tasks,
        order: ExecutionOrder::Sequential,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubSearchTool;
    use std::sync::Arc;

    const RESUME: &str = "Jane Doe\nSoftware Engineer";
    const JOB: &str = "Senior Engineer\n5 years experience";

    #[test]
    fn both_prompts_contain_both_source_texts() {
        let crew = build_crew(RESUME, JOB, Arc::new(StubSearchTool));
        for task in &crew.tasks {
            assert!(task.description.contains(RESUME));
            assert!(task.description.contains(JOB));
        }
    }

    #[test]
    fn analysis_task_precedes_cover_letter_task() {
        let crew = build_crew(RESUME, JOB, Arc::new(StubSearchTool));
        assert_eq!(crew.tasks.len(), 2);
        assert_eq!(crew.agent_for(&crew.tasks[0]).role, "Resume Analyst");
        assert_eq!(
            crew.agent_for(&crew.tasks[1]).role,
            "Professional Cover Letter Writer"
        );
        assert_eq!(crew.order, ExecutionOrder::Sequential);
    }

    #[test]
    fn search_tool_is_attached_to_the_analyst_only() {
        let crew = build_crew(RESUME, JOB, Arc::new(StubSearchTool));
        let analyst = &crew.agents[0];
        let writer = &crew.agents[1];
        assert_eq!(analyst.tools.len(), 1);
        assert_eq!(analyst.tools[0].name(), "Scrape Google Searches");
        assert!(writer.tools.is_empty());
    }

    #[test]
    fn only_the_writer_may_delegate() {
        let crew = build_crew(RESUME, JOB, Arc::new(StubSearchTool));
        assert!(!crew.agents[0].allow_delegation);
        assert!(crew.agents[1].allow_delegation);
    }
}
