//! Starter résumé used when no persisted snapshot exists.
//!
//! The host loads this on first launch and whenever the user resets the
//! editor. Content is the application's seeded example; the engine only
//! cares that every section is populated so the full pipeline is exercised
//! out of the box.

use crate::model::{EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument};

/// Build the default template document.
pub fn starter() -> ResumeDocument {
    ResumeDocument {
        full_name: "Alex Chen".to_string(),
        title: "Senior Product Designer".to_string(),
        email: "alex.chen@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        location: "San Francisco, CA".to_string(),
        website: "alexchen.design".to_string(),
        summary: "Award-winning product designer with over 8 years of experience in \
                  building user-centric digital products. Specialized in design systems, \
                  minimalist UI, and accessible UX. Proven track record of leading design \
                  teams and delivering high-impact projects for fintech and healthcare \
                  startups."
            .to_string(),
        experience: vec![
            ExperienceEntry {
                id: "exp-1".to_string(),
                company: "Linear & Co.".to_string(),
                role: "Lead Product Designer".to_string(),
                dates: "2021 - Present".to_string(),
                description: "Spearheaded the redesign of the core mobile application, \
                              resulting in a 40% increase in user retention. Established a \
                              comprehensive design system used by 30+ engineers and \
                              designers. Mentored junior designers and conducted weekly \
                              design critiques."
                    .to_string(),
            },
            ExperienceEntry {
                id: "exp-2".to_string(),
                company: "Vercel Inc.".to_string(),
                role: "Senior UI/UX Designer".to_string(),
                dates: "2018 - 2021".to_string(),
                description: "Designed and launched the analytics dashboard feature, \
                              utilized by 50k+ developers. Collaborated closely with \
                              frontend engineers to ensure pixel-perfect implementation \
                              using React and Tailwind CSS."
                    .to_string(),
            },
        ],
        education: vec![EducationEntry {
            id: "edu-1".to_string(),
            school: "Rhode Island School of Design".to_string(),
            degree: "BFA in Graphic Design".to_string(),
            dates: "2014 - 2018".to_string(),
            description: "Graduated with Honors. Focus on Typography and Interaction Design."
                .to_string(),
        }],
        projects: vec![ProjectEntry {
            id: "proj-1".to_string(),
            name: "ZenFocus".to_string(),
            link: Some("zenfocus.app".to_string()),
            description: "A minimal productivity timer app for macOS.".to_string(),
            technologies: vec!["Swift".to_string(), "SwiftUI".to_string()],
        }],
        skills: [
            "Figma",
            "Prototyping",
            "Design Systems",
            "HTML/CSS",
            "React Basic",
            "User Research",
            "Agile Methodology",
            "Motion Design",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        enable_pagination: false,
    }
}
