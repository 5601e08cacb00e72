//! Duvenhof Golf Club, the built-in 18-hole course.
//!
//! Authored coordinates; every hole carries a single white tee with the
//! stroke index defaulted to the hole number, and a center-only green (no
//! digitized boundary).

use crate::models::course::{Course, GreenGeometry, Hole, TeeBox};
use crate::models::geo::GeoPoint;

fn hole(number: u32, par: u32, tee: (f64, f64), green: (f64, f64)) -> Hole {
    Hole {
        number,
        par,
        tee_boxes: vec![TeeBox {
            id: format!("duvenhof-{}-white", number),
            name: "White".to_string(),
            color: "#ffffff".to_string(),
            location: GeoPoint::new(tee.0, tee.1),
            par,
            stroke_index: number,
        }],
        green: GreenGeometry::point_only(GeoPoint::new(green.0, green.1)),
    }
}

/// The built-in course played when no custom course is selected.
pub fn duvenhof_course() -> Course {
    Course {
        id: "duvenhof_builtin".to_string(),
        name: "Duvenhof Golf Club".to_string(),
        country: Some("Germany".to_string()),
        holes: vec![
            hole(1, 4, (51.253031, 6.610690), (51.256435, 6.610896)),
            hole(2, 5, (51.256303, 6.611343), (51.253027, 6.613838)),
            hole(3, 4, (51.253934, 6.613799), (51.256955, 6.612713)),
            hole(4, 4, (51.256230, 6.613031), (51.253919, 6.614703)),
            hole(5, 5, (51.253513, 6.613811), (51.257468, 6.611944)),
            hole(6, 3, (51.257525, 6.611174), (51.256186, 6.609659)),
            hole(7, 4, (51.256339, 6.608953), (51.259878, 6.608542)),
            hole(8, 3, (51.259387, 6.608203), (51.259375, 6.606481)),
            hole(9, 4, (51.259009, 6.607590), (51.256032, 6.606043)),
            hole(10, 3, (51.256458, 6.606498), (51.257419, 6.606892)),
            hole(11, 4, (51.256823, 6.607438), (51.259129, 6.604306)),
            hole(12, 4, (51.259052, 6.603608), (51.260501, 6.601357)),
            hole(13, 3, (51.260116, 6.601089), (51.259186, 6.602760)),
            hole(14, 5, (51.259147, 6.601981), (51.255365, 6.601745)),
            hole(15, 4, (51.255140, 6.603011), (51.258660, 6.603824)),
            hole(16, 4, (51.259015, 6.603646), (51.256333, 6.605922)),
            hole(17, 4, (51.255532, 6.606054), (51.256139, 6.608421)),
            hole(18, 4, (51.256022, 6.608926), (51.252957, 6.609506)),
        ],
    }
}
