use serde::{Deserialize, Serialize};

/// 题目详情，对应 `GET /api/questions/{id}/`
///
/// 拉取后不可变；重新拉取时整体替换
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: u64,
    pub title: String,
    /// 服务端提供的富文本（HTML），原样渲染，不做清洗
    pub description: String,
}

/// 题目列表中的一行，对应 `GET /api/questions/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSummary {
    pub id: u64,
    pub title: String,
}

impl ProblemSummary {
    /// 该题详情页的站内路径
    pub fn detail_path(&self) -> String {
        format!("/problems/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn problem_ignores_extra_server_fields() {
        let problem: Problem = serde_json::from_value(json!({
            "id": 1,
            "title": "Two Sum",
            "description": "<p>Find two numbers</p>",
            "test_cases": [{"input": "1 2", "output": "3"}]
        }))
        .unwrap();

        assert_eq!(problem.id, 1);
        assert_eq!(problem.description, "<p>Find two numbers</p>");
    }

    #[test]
    fn problem_without_description_is_malformed() {
        let parsed = serde_json::from_value::<Problem>(json!({"id": 1, "title": "Two Sum"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn summary_links_to_detail_route() {
        let summary = ProblemSummary {
            id: 42,
            title: "Reverse".to_string(),
        };
        assert_eq!(summary.detail_path(), "/problems/42");
    }
}
