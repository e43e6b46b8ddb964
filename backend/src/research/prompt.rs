//! Research prompt template

/// Build the research prompt for a product idea
///
/// The idea is embedded verbatim. The same idea always yields the same prompt.
pub fn build_research_prompt(idea: &str) -> String {
    format!(
        r#"Analyze the following product idea and provide a comprehensive market research report.
Product Idea: "{}"

Please provide the analysis in the following structured format:
1. **Market Analysis**: Identify the target audience, estimate the market size, and list key trends.
2. **Competitive Landscape**: List 2-3 key competitors, detailing their main strengths and weaknesses.
3. **SWOT Analysis**: Provide a brief SWOT analysis for the product idea.
4. **Feature Suggestions**: Suggest 3-5 core features for an MVP.
5. **Marketing Strategy**: Propose 3-5 high-level marketing strategies.
6. **Potential Risks**: Identify 2-3 potential risks or challenges.

Ensure your response is concise, insightful, and directly addresses the product idea."#,
        idea
    )
}
