mod yaml_runner;

pub use yaml_runner::{
    RenderCase, TestResult, load_render_cases_from_dir, load_render_cases_from_str,
    run_render_case, run_render_cases,
};
