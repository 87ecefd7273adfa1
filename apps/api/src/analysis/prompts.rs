// All LLM prompt templates for SRS analysis.
// Templates are static; builders append caller text after the instructions,
// one headed section per input, separated by a blank line.

pub const SUMMARY_PROMPT: &str = "\
Please accomplish the following task based strictly on the document.
Task:
Analyze the document and make sure that you have not missed any feature or requirements.
Do not miss any functional, technical or non-functional requirements.
Finally, just provide a detailed summary of the functionality of the software project.";

pub const FEATURE_EXTRACTION_PROMPT: &str = "\
You are an expert in requirements analysis and documentation. Below, you will receive the full SRS document along with the project summary. Your task is to:

Thoroughly Analyze the Documents:
- Ensure that no feature or requirement is missed—cover all functional, technical, and non-functional requirements.
- Extract every detail from both the SRS and the project summary, including explicit requirement statements, technical details, and implicit dependencies.

Generate a Comprehensive Final Report:
- Feature-wise Breakdown: List each feature and sub-feature with clear headings.
- Detailed Descriptions: For every feature, provide a detailed description that includes:
  * Exact requirement statements
  * Technical specifications or details mentioned
  * The role and purpose of the feature in the overall project
  * Dependencies and relationships with other features
- Additional Context: Include any other important information or insights you extract from the documents that add clarity or value to the requirements analysis.

Output Flexibility:
- The report can be as long as necessary to ensure completeness.
- Do not summarize or omit any critical information.";

pub const FEATURE_RE_EVALUATION_PROMPT: &str = "\
You are an expert in requirements analysis and documentation. Below, you will receive the original SRS, previous feature extraction report along with user feedback. Your task is to:

Re-Evaluate the Existing Report:
- Carefully analyze the SRS and review the previous feature extraction report alongside the provided user feedback.
- If the feedback indicates that changes or improvements are needed, re-analyze the full SRS document in conjunction with the previous report.
- Ensure that all functional, technical, and non-functional requirements are fully captured.
- Whatever the changes are requested by the user, make it carefully keep in mind that previous extracted feature details should be there. Additionally you have incorporate the changes requested by the user.

Generate an Updated Comprehensive Final Report:
- Feature-wise Breakdown: List each feature and sub-feature with clear, organized headings.
- Detailed Descriptions: For every feature, provide:
  * Exact requirement statements
  * Technical specifications or details mentioned
  * The role and purpose of the feature in the overall project
  * Dependencies and relationships with other features";

pub const RISK_ANALYSIS_PROMPT: &str = "\
You are an expert in risk analysis and security assessment for software requirements specifications (SRS). You will be provided with an SRS document along with detailed feature descriptions.

Your task is to systematically analyze each feature and requirement, ensuring that no aspect is overlooked. Follow these steps:

Identify Possible Risks:
- Evaluate each feature's implementation and operation.
- Consider risks such as system failures, incorrect functionality, regulatory compliance issues, and operational inefficiencies.

Analyze Potential Vulnerabilities and Security Issues:
- Identify any weaknesses that may be exploited.
- Consider attack vectors such as unauthorized access, data breaches, injection attacks, or denial-of-service vulnerabilities.
- Highlight compliance risks with standards like ISO 27001, GDPR, or HIPAA if applicable.

Provide Risk Mitigation and Security Guidelines:
- Suggest industry best practices to reduce risks.
- Recommend tools, frameworks, or processes to enhance security and compliance.
- Provide step-by-step strategies for preventing vulnerabilities from being exploited.

Ensure that your analysis covers every feature and requirement within the document without omissions. Present your findings in a structured manner, clearly linking risks to mitigation strategies.";

const SRS_HEADER: &str = "Here is the SRS document content:";
const SUMMARY_HEADER: &str = "Here is the project summary:";
const PREVIOUS_REPORT_HEADER: &str = "Here is the previous report:";
const FEEDBACK_HEADER: &str = "Here is the user feedback:";
const FEATURES_HEADER: &str = "Here are the feature details:";
const PROJECT_NAME_HEADER: &str = "Project name:";

fn compose(instructions: &str, sections: &[(&str, &str)]) -> String {
    let mut prompt = String::from(instructions);
    for (header, body) in sections {
        prompt.push_str("\n\n");
        prompt.push_str(header);
        prompt.push('\n');
        prompt.push_str(body);
    }
    prompt
}

pub fn summary_prompt(srs_text: &str, project_name: Option<&str>) -> String {
    let mut prompt = compose(SUMMARY_PROMPT, &[(SRS_HEADER, srs_text)]);
    if let Some(name) = project_name {
        prompt.push_str(&format!("\n\n{PROJECT_NAME_HEADER} {name}"));
    }
    prompt
}

pub fn feature_extraction_prompt(srs_content: &str, project_summary: &str) -> String {
    compose(
        FEATURE_EXTRACTION_PROMPT,
        &[(SRS_HEADER, srs_content), (SUMMARY_HEADER, project_summary)],
    )
}

pub fn feature_re_evaluation_prompt(
    srs_content: &str,
    previous_features: &str,
    user_feedback: &str,
) -> String {
    compose(
        FEATURE_RE_EVALUATION_PROMPT,
        &[
            (SRS_HEADER, srs_content),
            (PREVIOUS_REPORT_HEADER, previous_features),
            (FEEDBACK_HEADER, user_feedback),
        ],
    )
}

pub fn risk_analysis_prompt(srs_content: &str, features: &str) -> String {
    compose(
        RISK_ANALYSIS_PROMPT,
        &[(SRS_HEADER, srs_content), (FEATURES_HEADER, features)],
    )
}
