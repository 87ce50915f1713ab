//! Outreach and discovery email templates for a persona
//!
//! Rendering is a pure function of the persona and product name, so the same
//! inputs always produce byte-identical text.

use prospect_domain::{CustomerPersona, EmailTemplates};

/// Render both templates for a persona
pub fn render_templates(persona: &CustomerPersona, product_name: &str) -> EmailTemplates {
    EmailTemplates {
        sales: render_sales_email(persona, product_name),
        discovery: render_discovery_email(persona, product_name),
    }
}

/// Attach rendered templates to every persona
pub fn apply_templates(personas: Vec<CustomerPersona>, product_name: &str) -> Vec<CustomerPersona> {
    personas
        .into_iter()
        .map(|persona| {
            let templates = render_templates(&persona, product_name);
            persona.with_templates(templates)
        })
        .collect()
}

fn render_sales_email(persona: &CustomerPersona, product_name: &str) -> String {
    format!(
        "Subject: How {product} helps {name} with {concern}\n\
\n\
Hi there,\n\
\n\
I work with {name} every day, and one thing keeps coming up: {most}. \
That is exactly what we built {product} to deliver.\n\
\n\
We also know that {least} rarely makes your list of priorities, so {product} \
keeps it out of your way and lets you focus on the work that matters.\n\
\n\
Would you be open to a 15-minute call next week? I'd like to show you how \
{product} could make a measurable difference on {concern}.\n\
\n\
Best regards,\n\
[Your Name]\n",
        product = product_name,
        name = persona.name(),
        most = persona.cares_most_about(),
        least = persona.cares_least_about(),
        concern = persona.primary_concern(),
    )
}

fn render_discovery_email(persona: &CustomerPersona, product_name: &str) -> String {
    format!(
        "Subject: Learning how {name} approach {concern}\n\
\n\
Hi there,\n\
\n\
I'm researching how {name} think about {most}, and I'd really value your perspective.\n\
\n\
We're building {product} and want to make sure it solves real problems rather than \
imagined ones. A few questions I'd love to hear your take on:\n\
\n\
- What is your biggest challenge around {concern} today?\n\
- How are you handling it right now, and what does that cost you?\n\
- How much of your week goes to {least}?\n\
\n\
Would you have 20 minutes for a conversation? No sales pitch, I'm only here to learn.\n\
\n\
Thanks,\n\
[Your Name]\n",
        product = product_name,
        name = persona.name(),
        most = persona.cares_most_about(),
        least = persona.cares_least_about(),
        concern = persona.primary_concern(),
    )
}
