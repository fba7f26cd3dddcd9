use crate::construction;

use super::{FlagColors, FlagDefinition, FlagShape, StepDescription, StepKind};

const STEPS: [StepDescription; 24] = [
    StepDescription::new(1, "Draw line AB from left to right", StepKind::Line, 2),
    StepDescription::new(2, "Draw AC perpendicular to AB, AC = AB + 1/3 AB", StepKind::Line, 2),
    StepDescription::new(3, "Mark D on AC where AD = AB, join B and D", StepKind::Line, 2),
    StepDescription::new(4, "From BD mark off E making BE equal to AB", StepKind::Point, 1),
    StepDescription::new(5, "Draw line FG parallel to AB, FG = AB", StepKind::Line, 2),
    StepDescription::new(6, "Mark AH = 1/4 AB, draw HI parallel to AC", StepKind::Line, 2),
    StepDescription::new(7, "Bisect CF at J, draw JK parallel to AB", StepKind::Line, 2),
    StepDescription::new(8, "L is intersection of JK and HI", StepKind::Point, 1),
    StepDescription::new(9, "Join J and G", StepKind::Line, 1),
    StepDescription::new(10, "M is intersection of JG and HI", StepKind::Point, 1),
    StepDescription::new(11, "With centre M, mark N on HI", StepKind::Point, 1),
    StepDescription::new(12, "Draw line OM parallel to AB", StepKind::Line, 1),
    StepDescription::new(13, "Centre L, radius LN, draw semi-circle", StepKind::Arc, 2),
    StepDescription::new(14, "Centre M, radius MQ, draw semi-circle", StepKind::Arc, 2),
    StepDescription::new(15, "Centre N, radius NM, draw arc", StepKind::Arc, 2),
    StepDescription::new(16, "Centre T, radius TS, draw semi-circle", StepKind::Arc, 2),
    StepDescription::new(17, "Centre T, radius TM, draw arc", StepKind::Arc, 2),
    StepDescription::new(18, "Create 8 triangles for moon crescent", StepKind::Triangle, 3),
    StepDescription::new(19, "Bisect AF at U, draw UV parallel to AB", StepKind::Line, 2),
    StepDescription::new(20, "Centre W, radius MN, draw circle", StepKind::Circle, 2),
    StepDescription::new(21, "Centre W, radius LN, draw circle", StepKind::Circle, 2),
    StepDescription::new(22, "Create 12 triangles for sun rays", StepKind::Triangle, 3),
    StepDescription::new(23, "Add deep blue border, width = TN", StepKind::Custom, 2),
    StepDescription::new(24, "Complete flag construction", StepKind::Custom, 2),
];

/// The national flag of Nepal, the only non-rectangular national flag.
pub const NEPAL: FlagDefinition = FlagDefinition {
    id: "nepal",
    name: "National Flag of Nepal",
    country: "Nepal",
    shape: FlagShape::Pennon,
    official_source: "Constitution of Nepal, Schedule-1 (Relating to clause (2) of Article 8)",
    adopted_date: Some("1962-12-16"),
    colors: FlagColors {
        primary: "#DC143C",
        secondary: "#FFFFFF",
        border: Some("#003893"),
    },
    construction_steps: &STEPS,
    build: construction::build,
    build_up_to: construction::build_up_to_step,
};
