//! Canned recommendation text, one entry per travel mode
//!
//! `description` and `alternative_description` are handlebars templates over
//! [`Placeholders`], rendered by [`super::render`]. They hold plain text, so
//! values are inserted with triple braces and escaped once, when the whole
//! block is rendered.

use serde::Serialize;

use crate::models::TravelMode;

/// Topics the free-text prompt scan can route to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTopic {
    Children,
    Time,
    Weather,
}

impl PromptTopic {
    /// Scan order matters: the first topic with a matching keyword wins
    pub const ALL: [PromptTopic; 3] = [PromptTopic::Children, PromptTopic::Time, PromptTopic::Weather];

    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            PromptTopic::Children => &["child", "kid"],
            PromptTopic::Time => &["time", "late", "hurry"],
            PromptTopic::Weather => &["rain", "snow", "weather"],
        }
    }

    #[must_use]
    pub fn lead_in(self) -> &'static str {
        match self {
            PromptTopic::Children => "When traveling with children, ",
            PromptTopic::Time => "For time-sensitive travel, ",
            PromptTopic::Weather => "Given the weather conditions, ",
        }
    }
}

pub const GENERIC_PROMPT_RESPONSE: &str = "We've taken your additional information into account when making these recommendations. For the most personalized experience, consider factors like time of day, specific needs, and local events that might affect your journey.";

pub const ACCESSIBILITY_TIP: &str = "Look for accessible stations, vehicles, and routes";

pub const CONGESTION_NOTE: &str = "Reduces traffic congestion in the area";

#[derive(Debug)]
pub struct ModeTemplate {
    pub mode: TravelMode,
    pub title: &'static str,
    pub description: &'static str,
    /// Inserted into the footprint line, e.g. "when shared with 2 people, "
    pub footprint_qualifier: &'static str,
    pub weather_fair: &'static str,
    pub weather_severe: &'static str,
    pub air_clean: &'static str,
    pub air_poor: &'static str,
    /// "Total {time_label} time: approximately ..."
    pub time_label: &'static str,
    /// Provider step tag whose first instruction is quoted in the tips
    pub highlighted_step: Option<&'static str>,
    pub leading_tips: &'static [&'static str],
    pub trailing_tips: &'static [&'static str],
    pub luggage_hint: &'static str,
    pub children_advice: &'static str,
    pub time_advice: &'static str,
    pub weather_advice: &'static str,
    pub alternative_title: &'static str,
    pub alternative_description: &'static str,
    pub pros: &'static str,
    pub cons: &'static str,
}

impl ModeTemplate {
    #[must_use]
    pub fn prompt_advice(&self, topic: PromptTopic) -> &'static str {
        match topic {
            PromptTopic::Children => self.children_advice,
            PromptTopic::Time => self.time_advice,
            PromptTopic::Weather => self.weather_advice,
        }
    }
}

pub static TEMPLATES: [ModeTemplate; 4] = [
    ModeTemplate {
        mode: TravelMode::Transit,
        title: "Take Public Transit",
        description: "taking public transit from {{{origin}}} to {{{destination}}}",
        footprint_qualifier: "",
        weather_fair: "The weather is suitable for the short walks to and from transit stops.",
        weather_severe: "Public transit provides shelter from the current weather conditions.",
        air_clean: "Taking public transit helps maintain good air quality by reducing vehicle emissions.",
        air_poor: "Public transit reduces your exposure to poor air quality compared to walking or cycling.",
        time_label: "travel",
        highlighted_step: Some("TRANSIT"),
        leading_tips: &[
            "Check transit schedules before departing",
            "Consider using a transit app for real-time updates",
        ],
        trailing_tips: &[
            "Bring a book, podcast, or other entertainment for the journey",
            "Travel during off-peak hours if possible to avoid crowds",
        ],
        luggage_hint: "check transit policies for large items",
        children_advice: "public transit can be a good option. Look for family-friendly seating areas and plan for extra time at transfers.",
        time_advice: "check real-time transit updates before departing and have a backup plan in case of delays.",
        weather_advice: "public transit provides shelter from the elements. Bring an umbrella for the walks to and from stops.",
        alternative_title: "Public Transit",
        alternative_description: "Public transit options are available between {{{origin}}} and {{{destination}}}.",
        pros: "Lower emissions than driving alone, no parking costs, can be productive during travel",
        cons: "Subject to schedules, may require transfers, limited coverage in some areas",
    },
    ModeTemplate {
        mode: TravelMode::Walking,
        title: "Walk",
        description: "walking from {{{origin}}} to {{{destination}}}",
        footprint_qualifier: "",
        weather_fair: "The weather is ideal for walking.",
        weather_severe: "Consider bringing rain gear or choosing an alternative mode due to the weather.",
        air_clean: "Walking produces zero emissions and helps maintain the good air quality in the area.",
        air_poor: "Consider wearing a mask or choosing an alternative mode due to the air quality.",
        time_label: "walking",
        highlighted_step: None,
        leading_tips: &[
            "Wear comfortable shoes",
            "Stay hydrated, especially in warm weather",
            "Use pedestrian crossings and sidewalks where available",
        ],
        trailing_tips: &[
            "Consider a sun hat and sunscreen on sunny days",
            "Plan your route to include green spaces or interesting sights",
        ],
        luggage_hint: "consider a backpack or rolling bag for easier carrying",
        children_advice: "walking allows for flexibility to take breaks as needed. Bring snacks and water, and plan for rest stops along the way.",
        time_advice: "walking may not be the fastest option. Consider a faster alternative if you're in a hurry.",
        weather_advice: "if walking, dress appropriately for the weather with waterproof clothing and footwear.",
        alternative_title: "Walking",
        alternative_description: "The {{{distance}}} route from {{{origin}}} to {{{destination}}} is walkable.",
        pros: "Zero emissions, good exercise, no parking costs, most flexible routing",
        cons: "Longer travel time, requires physical exertion, weather dependent",
    },
    ModeTemplate {
        mode: TravelMode::Bicycling,
        title: "Bicycle",
        description: "bicycling from {{{origin}}} to {{{destination}}}",
        footprint_qualifier: "",
        weather_fair: "The weather is suitable for bicycling.",
        weather_severe: "Consider an alternative mode due to the weather conditions.",
        air_clean: "Bicycling produces zero emissions and helps maintain the good air quality in the area.",
        air_poor: "Consider wearing a mask or choosing an alternative mode due to the air quality.",
        time_label: "cycling",
        highlighted_step: None,
        leading_tips: &[
            "Wear a helmet and use lights if cycling near dusk",
            "Use dedicated bike lanes where available",
            "Consider bike-sharing options if you don't have your own bicycle",
        ],
        trailing_tips: &[
            "Bring a water bottle and stay hydrated",
            "Check your bike's tire pressure and brakes before departing",
        ],
        luggage_hint: "use panniers or a backpack for carrying items",
        children_advice: "consider child seats or trailers if the children are young. Plan for frequent breaks and bring plenty of water.",
        time_advice: "bicycling can be faster than walking or transit in congested areas. Plan your route to use bike lanes where available.",
        weather_advice: "cycling in adverse weather requires proper gear. Consider fenders for your bike and waterproof clothing.",
        alternative_title: "Bicycling",
        alternative_description: "The {{{distance}}} route from {{{origin}}} to {{{destination}}} can be traveled by bicycle.",
        pros: "Zero emissions, good exercise, no parking costs, often faster than walking",
        cons: "Requires physical exertion, weather dependent, may require special equipment",
    },
    ModeTemplate {
        mode: TravelMode::Driving,
        title: "Carpool/Rideshare",
        description: "carpooling from {{{origin}}} to {{{destination}}}",
        footprint_qualifier: "when shared with 2 people, ",
        weather_fair: "While the weather is nice enough for other modes, carpooling is still a good option if you need to bring items or prefer comfort.",
        weather_severe: "Carpooling provides shelter from the current weather conditions.",
        air_clean: "While air quality is good, carpooling still helps maintain it by reducing the number of vehicles on the road.",
        air_poor: "Carpooling reduces your exposure to poor air quality while still reducing emissions compared to driving alone.",
        time_label: "driving",
        highlighted_step: None,
        leading_tips: &[
            "Use ride-sharing apps to find carpool partners",
            "Consider electric or hybrid vehicles for further emissions reduction",
            "Check traffic conditions before departing",
        ],
        trailing_tips: &[
            "Park in a central location if visiting multiple destinations",
            "Practice eco-driving: maintain steady speed and avoid rapid acceleration",
        ],
        luggage_hint: "ensure your vehicle has enough space for luggage",
        children_advice: "carpooling provides comfort and flexibility. Make sure to have appropriate car seats if needed.",
        time_advice: "driving may be faster in some cases, but be aware of potential traffic delays, especially during peak hours.",
        weather_advice: "driving provides the most protection from the elements, but be cautious as road conditions may be affected.",
        alternative_title: "Carpool/Rideshare",
        alternative_description: "Carpooling from {{{origin}}} to {{{destination}}} is an option if other modes don't meet your needs.",
        pros: "More convenient than public transit, lower emissions per person than driving alone",
        cons: "Still produces significant emissions, subject to traffic delays, parking costs",
    },
];

/// Template for a mode
#[must_use]
pub fn template_for(mode: TravelMode) -> &'static ModeTemplate {
    match mode {
        TravelMode::Transit => &TEMPLATES[0],
        TravelMode::Walking => &TEMPLATES[1],
        TravelMode::Bicycling => &TEMPLATES[2],
        TravelMode::Driving => &TEMPLATES[3],
    }
}

/// Values substituted into template placeholders
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Placeholders<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub distance: &'a str,
}
