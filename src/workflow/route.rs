//! 路由解析
//!
//! 站内三条路由：`/`、`/problems` 为题目列表，`/problems/{id}` 为题目详情。
//! `{id}` 不做数字校验，原样交给详情接口

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ProblemList,
    ProblemDetail { id: String },
    NotFound,
}

fn detail_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^/problems/([^/]+)/?$").expect("路由正则无效"))
}

/// 将站内路径解析为路由，忽略查询串和片段
pub fn resolve_route(path: &str) -> Route {
    let path = path.split(['?', '#']).next().unwrap_or_default();

    match path {
        "" | "/" | "/problems" | "/problems/" => Route::ProblemList,
        _ => match detail_pattern().captures(path) {
            Some(caps) => Route::ProblemDetail {
                id: caps[1].to_string(),
            },
            None => Route::NotFound,
        },
    }
}

/// 从路径中取出题目标识，非详情页返回 `None`
pub fn problem_id(path: &str) -> Option<String> {
    match resolve_route(path) {
        Route::ProblemDetail { id } => Some(id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_routes() {
        assert_eq!(resolve_route("/"), Route::ProblemList);
        assert_eq!(resolve_route("/problems"), Route::ProblemList);
        assert_eq!(resolve_route("/problems/"), Route::ProblemList);
        assert_eq!(resolve_route(""), Route::ProblemList);
    }

    #[test]
    fn detail_route_extracts_id() {
        assert_eq!(problem_id("/problems/1").as_deref(), Some("1"));
        assert_eq!(problem_id("/problems/12/").as_deref(), Some("12"));
        assert_eq!(problem_id("/problems/7?tab=code#editor").as_deref(), Some("7"));
    }

    #[test]
    fn non_numeric_id_passes_through() {
        assert_eq!(problem_id("/problems/two-sum").as_deref(), Some("two-sum"));
    }

    #[test]
    fn unknown_paths_have_no_id() {
        assert_eq!(resolve_route("/leaderboard"), Route::NotFound);
        assert_eq!(resolve_route("/problems/1/edit"), Route::NotFound);
        assert_eq!(problem_id("/problems"), None);
    }
}
