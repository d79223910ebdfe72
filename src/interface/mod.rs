pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_calorie_delta, prompt_macro_deltas, prompt_menu_choice, prompt_weight, MenuChoice,
};
pub use render::{display_carb_drift, display_plan, percent_of_total, render_json, PlanReport};
