//! Static sidebar and ticker content

use serde::{Deserialize, Serialize};

/// Owner profile shown at the top of the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar_url: String,
    pub linkedin_url: String,
}

/// Press outlet link in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressOutlet {
    pub name: String,
    pub url: String,
    pub logo_url: String,
}

/// Client logo shown in the ticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerLogo {
    pub id: String,
    pub src: String,
    pub alt: String,
}

/// Everything on the page that is not project data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub press: Vec<PressOutlet>,
    pub contact_heading: String,
    pub ticker: Vec<TickerLogo>,
}

fn outlet(name: &str, url: &str, logo_url: &str) -> PressOutlet {
    PressOutlet {
        name: name.to_string(),
        url: url.to_string(),
        logo_url: logo_url.to_string(),
    }
}

fn logo(id: &str, slug: &str, alt: &str) -> TickerLogo {
    TickerLogo {
        id: id.to_string(),
        src: format!("/icons/{}.svg", slug),
        alt: alt.to_string(),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Alejandro".to_string(),
                title: "Creative Director".to_string(),
                bio: "Creative Director with over 8+ years of experience leading \
                      multidisciplinary teams across branding, product design, marketing and \
                      emerging technology. Recognized for driving impactful storytelling and \
                      digital innovation through recognized creative leadership. Built and led \
                      a high-output agency responsible for campaigns, animation and content \
                      for major cultural figures and technology partners."
                    .to_string(),
                avatar_url: "https://framerusercontent.com/images/h4yrqkRp6ih6BZPFsW14dvuuUY.jpg"
                    .to_string(),
                linkedin_url: "https://www.linkedin.com/in/corpusalejandro/".to_string(),
            },
            press: vec![
                outlet(
                    "Adweek",
                    "https://www.adweek.com/",
                    "https://framerusercontent.com/images/IM3obMPeYuF6cPxRuyKaDF0jC0.svg",
                ),
                outlet(
                    "Deadline",
                    "https://deadline.com/",
                    "https://framerusercontent.com/images/bgaPYPZaE9kWxwgZMTSR479tHJs.svg",
                ),
                outlet(
                    "Adage",
                    "https://adage.com/",
                    "https://framerusercontent.com/images/uTBHAO3GnIDS92tifMfg7JjdA5U.svg",
                ),
            ],
            contact_heading: "Contact".to_string(),
            ticker: vec![
                logo("1", "peerspace", "Peerspace Logo"),
                logo("2", "betr", "Betr Logo"),
                logo("3", "consensys", "Consensys Logo"),
                logo("4", "condenast", "Condé Nast Logo"),
                logo("5", "clover", "Clover Logo"),
            ],
        }
    }
}
