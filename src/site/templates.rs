//! HTML fragments for each content domain
//!
//! Content fields are interpolated verbatim. Content is written by the site
//! owner, so no escaping is applied; markup in a field reaches the page as
//! markup.

use crate::domain::{
    ContactData, EducationEntry, ExperienceEntry, InterestEntry, IntroData, Position,
    PublicationEntry, SectionConfig, Social,
};

/// Navigation link for a section id
pub fn nav_link(id: &str, title: &str) -> String {
    format!(r##"<a href="#{}">{}</a>"##, id, title)
}

/// Navigation bar: About, the configured sections in order, then Contact
pub fn navigation(sections: &[&SectionConfig]) -> String {
    let links: String = sections.iter().map(|s| nav_link(&s.id, &s.title)).collect();
    format!("{}{}{}", nav_link("about", "About"), links, nav_link("contact", "Contact"))
}

/// Name, tag line and location block of the header
pub fn header(intro: &IntroData) -> String {
    let tags: String = intro
        .tags()
        .into_iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, tag))
        .collect();

    format!(
        r#"
            <h1>{}</h1>
            <div class="tags">
                {}
            </div>
            <p class="location">{}</p>
        "#,
        intro.name,
        tags,
        intro.location()
    )
}

/// Icon links to each social profile, opened in a new tab
pub fn social_links(socials: &[Social]) -> String {
    socials
        .iter()
        .map(|social| {
            format!(
                r#"
            <a href="{}" target="_blank" rel="noopener noreferrer" title="{}">
                <i class="fab {}"></i>
            </a>
        "#,
                social.url, social.name, social.icon
            )
        })
        .collect()
}

/// Lead paragraph of the intro; later paragraphs are not rendered
pub fn about(intro: &IntroData) -> String {
    format!("<p>{}</p>", intro.lead())
}

fn position(position: &Position) -> String {
    let description: String = position
        .description
        .iter()
        .map(|line| format!("<li>{}</li>", line))
        .collect();

    let technologies = match &position.technologies {
        Some(techs) => {
            let tags: String = techs
                .iter()
                .map(|tech| format!(r#"<span class="tech-tag">{}</span>"#, tech))
                .collect();
            format!(r#"<div class="technologies">{}</div>"#, tags)
        }
        None => String::new(),
    };

    format!(
        r#"
                <div class="exp-item">
                    <div class="exp-header">
                        <div>
                            <h3>{} <span>@ {}</span></h3>
                            <div class="location">{}</div>
                        </div>
                        <span class="date">{}</span>
                    </div>
                    <ul>
                        {}
                    </ul>
                    {}
                </div>
            "#,
        position.title,
        position.company,
        position.location,
        position.display_period(),
        description,
        technologies
    )
}

/// Every position of every entry, in document order
pub fn experience(entries: &[ExperienceEntry]) -> String {
    entries
        .iter()
        .flat_map(ExperienceEntry::positions)
        .map(position)
        .collect()
}

pub fn education(entries: &[EducationEntry]) -> String {
    entries
        .iter()
        .map(|edu| {
            format!(
                r#"
            <div class="edu-item">
                <h3>{}</h3>
                <p>{} | {} - {}</p>
                <p>{}</p>
            </div>
        "#,
                edu.title,
                edu.institution,
                edu.start_date,
                edu.end_date,
                edu.lead()
            )
        })
        .collect()
}

pub fn interests(entries: &[InterestEntry]) -> String {
    entries
        .iter()
        .map(|interest| {
            format!(
                r#"
            <div class="interest-item">
                <span class="icon">{}</span>
                <h3>{}</h3>
                <p>{}</p>
            </div>
        "#,
                interest.icon, interest.title, interest.description
            )
        })
        .collect()
}

pub fn publications(entries: &[PublicationEntry]) -> String {
    entries
        .iter()
        .map(|publication| {
            let tags: String = publication
                .tags
                .iter()
                .map(|tag| format!(r#"<span class="publication-tag">{}</span>"#, tag))
                .collect();

            format!(
                r#"
            <div class="publication-item">
                <a href="{}" target="_blank" rel="noopener noreferrer">
                    <h3 class="publication-title">{}</h3>
                </a>
                <div class="publication-meta">
                    {} | {} {}
                </div>
                <p class="publication-description">{}</p>
                <div class="publication-tags">
                    {}
                </div>
            </div>
        "#,
                publication.link,
                publication.title,
                publication.authors.join(", "),
                publication.conference,
                publication.year,
                publication.description,
                tags
            )
        })
        .collect()
}

pub fn contact(contact: &ContactData) -> String {
    format!(
        r#"
            <p class="contact-description">{description}</p>
            <div class="contact-info">
                <div class="contact-item">
                    <i class="fas fa-envelope"></i>
                    <a href="mailto:{email}" class="contact-email">{email}</a>
                </div>
                <div class="contact-item">
                    <i class="fas fa-map-marker-alt"></i>
                    <span>{location}</span>
                </div>
            </div>
            <p class="contact-availability">{availability}</p>
        "#,
        description = contact.description,
        email = contact.email,
        location = contact.location,
        availability = contact.availability
    )
}
