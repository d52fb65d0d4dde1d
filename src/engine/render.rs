//! Handlebars rendering of mode texts and the recommendation block
//!
//! Every template lives in one registry built on first use. Mode texts are
//! rendered to plain text; the block template escapes each value as it is
//! inserted into the HTML.

use std::sync::LazyLock;

use handlebars::{Handlebars, TemplateError, handlebars_helper};
use tracing::error;

use crate::Result;
use crate::models::TravelMode;

use super::recommendation::Recommendation;
use super::templates::{Placeholders, TEMPLATES};

const BLOCK_TEMPLATE: &str = "recommendation";

const BLOCK: &str = "\
<h2>PRIMARY RECOMMENDATION: {{title}}</h2>

<p>Based on current conditions and your preferences, {{description}} is your most eco-friendly option.</p>

<h3>ENVIRONMENTAL IMPACT:</h3>
<ul>
{{#each environmental_impact}}<li>{{this}}</li>
{{/each}}</ul>

<h3>WEATHER CONSIDERATIONS:</h3>
<p>{{weather}}</p>

<h3>AIR QUALITY CONSIDERATIONS:</h3>
<p>{{air_quality}}</p>

<h3>PRACTICAL TIPS:</h3>
<ul>
{{#each practical_tips}}<li>{{this}}</li>
{{/each}}</ul>

{{#if additional_info}}<h3>BASED ON YOUR ADDITIONAL INFORMATION:</h3>
<p>{{additional_info}}</p>

{{/if}}<h2>ALTERNATIVES:</h2>
{{#each alternatives}}<h3>{{ordinal @index}}. {{title}}</h3>
<p>{{description}}</p>
<ul>
<li>Pros: {{pros}}</li>
<li>Cons: {{cons}}</li>
</ul>
{{/each}}";

handlebars_helper!(ordinal: |index: u64| index + 1);

static REGISTRY: LazyLock<Handlebars<'static>> = LazyLock::new(|| {
    let mut registry = Handlebars::new();
    registry.register_helper("ordinal", Box::new(ordinal));
    if let Err(e) = register_templates(&mut registry) {
        error!(error = %e, "Failed to register recommendation templates");
    }
    registry
});

fn description_name(mode: TravelMode) -> String {
    format!("{mode}.description")
}

fn alternative_name(mode: TravelMode) -> String {
    format!("{mode}.alternative_description")
}

fn register_templates(registry: &mut Handlebars<'static>) -> std::result::Result<(), TemplateError> {
    for template in &TEMPLATES {
        registry.register_template_string(&description_name(template.mode), template.description)?;
        registry.register_template_string(
            &alternative_name(template.mode),
            template.alternative_description,
        )?;
    }
    registry.register_template_string(BLOCK_TEMPLATE, BLOCK)
}

/// "taking public transit from A to B"
pub fn description(mode: TravelMode, placeholders: &Placeholders<'_>) -> Result<String> {
    Ok(REGISTRY.render(&description_name(mode), placeholders)?)
}

/// One-sentence pitch for a mode offered as an alternative
pub fn alternative_description(
    mode: TravelMode,
    placeholders: &Placeholders<'_>,
) -> Result<String> {
    Ok(REGISTRY.render(&alternative_name(mode), placeholders)?)
}

/// The HTML fragment block clients insert verbatim
pub fn block(recommendation: &Recommendation) -> Result<String> {
    Ok(REGISTRY.render(BLOCK_TEMPLATE, recommendation)?)
}
