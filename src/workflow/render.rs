//! 终端渲染
//!
//! 题目描述是服务端提供的 HTML，原样输出，不做清洗

use crate::models::{Problem, ProblemSummary};
use crate::workflow::view_state::ViewState;

const LOADING_TEXT: &str = "Loading...";

/// 渲染题目列表页
pub fn render_problem_list(state: &ViewState<Vec<ProblemSummary>>) -> String {
    match state {
        ViewState::Loading => LOADING_TEXT.to_string(),
        ViewState::Error(message) => message.clone(),
        ViewState::Loaded(list) => {
            let mut out = format!("Problem Set\n{:<6} Title\n{}\n", "#", "=".repeat(60));
            for summary in list {
                out.push_str(&format!(
                    "{:<6} {}  ({})\n",
                    summary.id,
                    summary.title,
                    summary.detail_path()
                ));
            }
            out
        }
    }
}

/// 渲染题目详情页：左侧描述，右侧编辑器内容
pub fn render_problem(state: &ViewState<Problem>, code: &str) -> String {
    let mut out = match state {
        ViewState::Loading => LOADING_TEXT.to_string(),
        ViewState::Error(message) => message.clone(),
        ViewState::Loaded(problem) => format!(
            "{}\n{}\n{}",
            problem.title,
            "=".repeat(60),
            problem.description
        ),
    };
    out.push_str(&format!("\n{}\n{}\n", "─".repeat(60), code));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_rows_link_to_detail_pages() {
        let state = ViewState::Loaded(vec![
            ProblemSummary {
                id: 1,
                title: "Two Sum".to_string(),
            },
            ProblemSummary {
                id: 2,
                title: "Reverse String".to_string(),
            },
        ]);
        let out = render_problem_list(&state);
        assert!(out.contains("Two Sum  (/problems/1)"));
        assert!(out.contains("Reverse String  (/problems/2)"));
    }

    #[test]
    fn description_html_is_rendered_verbatim() {
        let state = ViewState::Loaded(Problem {
            id: 1,
            title: "Two Sum".to_string(),
            description: "<p>Return <b>indices</b></p><script>x()</script>".to_string(),
        });
        let out = render_problem(&state, "print(1)");
        assert!(out.contains("<p>Return <b>indices</b></p><script>x()</script>"));
        assert!(out.ends_with("print(1)\n"));
    }

    #[test]
    fn editor_is_shown_even_while_loading() {
        let out = render_problem(&ViewState::Loading, "# Write your Python code here");
        assert!(out.starts_with(LOADING_TEXT));
        assert!(out.contains("# Write your Python code here"));
    }

    #[test]
    fn error_state_shows_message() {
        let state: ViewState<Problem> = ViewState::Error("Failed to load question.".to_string());
        assert!(render_problem(&state, "").starts_with("Failed to load question."));
    }

    #[test]
    fn list_has_header_and_one_row_per_problem() {
        let state = ViewState::Loaded(vec![ProblemSummary {
            id: 12,
            title: "Valid Parentheses".to_string(),
        }]);
        let out = render_problem_list(&state);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Problem Set");
        assert_eq!(lines[1], "#      Title");
        assert_eq!(lines[3], "12     Valid Parentheses  (/problems/12)");
        assert_eq!(lines.len(), 4);
    }
}
