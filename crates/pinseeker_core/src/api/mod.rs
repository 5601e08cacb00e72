pub mod json;

pub use json::{
    bag_from_json, bag_to_json, course_from_json, course_to_json, round_history_from_json,
    round_history_to_json,
};
