//! Static site content: events, speakers, brand partners, team. The records
//! are editorial data, validated by eye, not by code.

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Past,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Summit,
    Conference,
    Forum,
    Vip,
}

impl EventType {
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Summit => "Summit",
            EventType::Conference => "Conference",
            EventType::Forum => "Forum",
            EventType::Vip => "VIP Experience",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct Event {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub end_date: Option<&'static str>,
    pub location: &'static str,
    pub venue: Option<&'static str>,
    pub status: EventStatus,
    pub event_type: EventType,
    pub short_description: &'static str,
    pub description: &'static str,
    pub ticket_url: Option<&'static str>,
    pub speaker_slugs: &'static [&'static str],
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Expertise {
    Medical,
    Research,
    Investment,
    Wellness,
    Fitness,
}

impl Expertise {
    pub fn label(&self) -> &'static str {
        match self {
            Expertise::Medical => "Medical",
            Expertise::Research => "Research",
            Expertise::Investment => "Investment",
            Expertise::Wellness => "Wellness",
            Expertise::Fitness => "Fitness",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct Speaker {
    pub slug: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub organization: Option<&'static str>,
    pub short_bio: &'static str,
    pub is_featured: bool,
    pub expertise: &'static [Expertise],
}

#[derive(Clone, Copy, PartialEq)]
pub struct Brand {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct Differentiator {
    pub title: &'static str,
    pub description: &'static str,
    pub icon_path: &'static str,
}

pub struct CompanyInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub instagram: &'static str,
    pub linkedin: &'static str,
}

pub static COMPANY: CompanyInfo = CompanyInfo {
    name: "Healthspan Productions",
    tagline: "Premium events at the intersection of longevity science, capital, and culture.",
    email: "connect@healthspanevents.com",
    instagram: "https://instagram.com/healthspanevents",
    linkedin: "https://linkedin.com/company/healthspan-productions",
};

pub static EVENTS: &[Event] = &[
    Event {
        slug: "healthspan-summit-2026",
        title: "Healthspan Summit 2026",
        date: "2026-11-12",
        end_date: Some("2026-11-14"),
        location: "Miami, FL",
        venue: Some("Faena Forum"),
        status: EventStatus::Upcoming,
        event_type: EventType::Summit,
        short_description:
            "Three days with the scientists, founders, and investors defining the next decade of human healthspan.",
        description:
            "Our flagship gathering returns to Miami. Across three days of keynotes, clinical deep dives, and curated \
             networking, the Healthspan Summit brings together the researchers publishing the science, the founders \
             building on it, and the investors funding both. Expect longevity clinic operators next to geroscience \
             labs, protocol demos on the floor, and an evening program designed for real conversation rather than \
             badge scanning.",
        ticket_url: Some("https://tickets.healthspanevents.com/summit-2026"),
        speaker_slugs: &["elena-voss", "marcus-okafor", "priya-raman", "daniel-hart"],
    },
    Event {
        slug: "longevity-capital-forum-2026",
        title: "Longevity Capital Forum",
        date: "2026-09-22",
        end_date: None,
        location: "New York, NY",
        venue: Some("Cipriani 25 Broadway"),
        status: EventStatus::Upcoming,
        event_type: EventType::Forum,
        short_description:
            "A single day connecting longevity founders with the funds and family offices backing the field.",
        description:
            "One day, one room, no parallel tracks. The Longevity Capital Forum pairs a morning of market analysis \
             from the field's most active investors with an afternoon of founder showcases selected by our scientific \
             advisors. Attendance is capped so every company on stage gets a real hearing.",
        ticket_url: Some("https://tickets.healthspanevents.com/capital-forum-2026"),
        speaker_slugs: &["priya-raman", "daniel-hart"],
    },
    Event {
        slug: "healthspan-summit-2025",
        title: "Healthspan Summit 2025",
        date: "2025-11-06",
        end_date: Some("2025-11-08"),
        location: "Miami, FL",
        venue: Some("Faena Forum"),
        status: EventStatus::Past,
        event_type: EventType::Summit,
        short_description:
            "The inaugural summit: 600 attendees, 40 speakers, and the conversations that started it all.",
        description:
            "The first Healthspan Summit sold out six weeks early. Over three days, 600 clinicians, researchers, \
             founders, and investors set the tone for what these gatherings would become: science first, hype last, \
             and an attendee list curated as carefully as the stage.",
        ticket_url: None,
        speaker_slugs: &["elena-voss", "sofia-lindqvist"],
    },
    Event {
        slug: "founders-longevity-dinner-2025",
        title: "Founders' Longevity Dinner",
        date: "2025-06-18",
        end_date: None,
        location: "Austin, TX",
        venue: None,
        status: EventStatus::Past,
        event_type: EventType::Vip,
        short_description:
            "An invitation-only dinner for thirty founders building in the longevity space.",
        description:
            "No stage, no slides. Thirty founders, a private chef working from a protocol-friendly menu, and a single \
             long table. The dinner series is where many of our summit speakers and brand partners first met.",
        ticket_url: None,
        speaker_slugs: &[],
    },
];

pub static SPEAKERS: &[Speaker] = &[
    Speaker {
        slug: "elena-voss",
        name: "Dr. Elena Voss",
        role: "Director, Center for Geroscience",
        organization: Some("Meridian Institute"),
        short_bio:
            "Leads one of the largest academic programs studying cellular senescence; 120+ peer-reviewed publications.",
        is_featured: true,
        expertise: &[Expertise::Medical, Expertise::Research],
    },
    Speaker {
        slug: "marcus-okafor",
        name: "Marcus Okafor",
        role: "Founder & CEO",
        organization: Some("Vital Axis"),
        short_bio:
            "Building clinical-grade biomarker tracking for preventive medicine; previously scaled two digital-health companies.",
        is_featured: true,
        expertise: &[Expertise::Medical, Expertise::Fitness],
    },
    Speaker {
        slug: "priya-raman",
        name: "Priya Raman",
        role: "General Partner",
        organization: Some("Telomere Ventures"),
        short_bio:
            "Invests at the seed stage across diagnostics, longevity clinics, and geroscience therapeutics.",
        is_featured: true,
        expertise: &[Expertise::Investment],
    },
    Speaker {
        slug: "daniel-hart",
        name: "Daniel Hart",
        role: "Managing Director",
        organization: Some("Hart Family Office"),
        short_bio:
            "Allocates across the longevity stack, from early-stage funds to clinic roll-ups.",
        is_featured: false,
        expertise: &[Expertise::Investment],
    },
    Speaker {
        slug: "sofia-lindqvist",
        name: "Sofia Lindqvist",
        role: "Performance & Recovery Coach",
        organization: None,
        short_bio:
            "Works with elite athletes on sleep, recovery, and training load; translates the protocols for everyone else.",
        is_featured: false,
        expertise: &[Expertise::Fitness, Expertise::Wellness],
    },
    Speaker {
        slug: "james-whitfield",
        name: "Dr. James Whitfield",
        role: "Chief Medical Officer",
        organization: Some("Apex Longevity Clinics"),
        short_bio:
            "Oversees clinical protocols across a national network of preventive-medicine clinics.",
        is_featured: true,
        expertise: &[Expertise::Medical, Expertise::Wellness],
    },
];

pub static BRANDS: &[Brand] = &[
    Brand { name: "Vital Axis", url: "https://example.com/vital-axis" },
    Brand { name: "Telomere Ventures", url: "https://example.com/telomere" },
    Brand { name: "Apex Longevity", url: "https://example.com/apex" },
    Brand { name: "Meridian Institute", url: "https://example.com/meridian" },
    Brand { name: "Halcyon Labs", url: "https://example.com/halcyon" },
    Brand { name: "Primea Diagnostics", url: "https://example.com/primea" },
    Brand { name: "Northwind Recovery", url: "https://example.com/northwind" },
    Brand { name: "Sage Nutrition", url: "https://example.com/sage" },
];

pub static TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Alexandra Reyes",
        role: "Founder & Creative Director",
        bio: "Spent a decade producing flagship conferences in tech before turning to the longevity field full time.",
    },
    TeamMember {
        name: "Tom Becker",
        role: "Head of Partnerships",
        bio: "Connects the brands, clinics, and funds that make each event possible.",
    },
    TeamMember {
        name: "Naomi Chen",
        role: "Program Director",
        bio: "Curates every stage: if a talk made you rethink a protocol, Naomi booked it.",
    },
];

pub static DIFFERENTIATORS: &[Differentiator] = &[
    Differentiator {
        title: "Science First",
        description:
            "Every speaker is vetted by our scientific advisors. If the evidence isn't there, neither is the stage time.",
        icon_path: "M9.75 3v6.75m0 0L6 17.25h12L14.25 9.75m-4.5 0h4.5m0 0V3M6 21h12",
    },
    Differentiator {
        title: "Capital in the Room",
        description:
            "Funds and family offices attend to deploy, not to observe. Founders leave with term sheets, not just business cards.",
        icon_path: "M2.25 18L9 11.25l4.306 4.307a11.95 11.95 0 015.814-5.519l2.74-1.22m0 0l-5.94-2.28m5.94 2.28l-2.28 5.941",
    },
    Differentiator {
        title: "Curated Community",
        description:
            "Attendance is capped and applications reviewed, so every conversation is worth having.",
        icon_path: "M15 6.75a3 3 0 11-6 0 3 3 0 016 0zm6 3a2.25 2.25 0 11-4.5 0 2.25 2.25 0 014.5 0zm-13.5 0a2.25 2.25 0 11-4.5 0 2.25 2.25 0 014.5 0z",
    },
    Differentiator {
        title: "Protocol-Friendly",
        description:
            "From the menu to the lighting to the schedule, the events practice what the stage preaches.",
        icon_path: "M12 3v2.25m6.364.386l-1.591 1.591M21 12h-2.25m-.386 6.364l-1.591-1.591M12 18.75V21m-4.773-4.227l-1.591 1.591M5.25 12H3m4.227-4.773L5.636 5.636M15.75 12a3.75 3.75 0 11-7.5 0 3.75 3.75 0 017.5 0z",
    },
    Differentiator {
        title: "Experiences, Not Expo Halls",
        description:
            "Cold plunges at sunrise, chef-led dinners at night. The programming extends well past the main stage.",
        icon_path: "M9.813 15.904L9 18.75l-.813-2.846a4.5 4.5 0 00-3.09-3.09L2.25 12l2.846-.813a4.5 4.5 0 003.09-3.09L9 5.25l.813 2.846a4.5 4.5 0 003.09 3.09L15.75 12l-2.846.813a4.5 4.5 0 00-3.09 3.09z",
    },
    Differentiator {
        title: "Year-Round Network",
        description:
            "The summit is the anchor, but the dinners, salons, and digital community run all year.",
        icon_path: "M12 21a9.004 9.004 0 008.716-6.747M12 21a9.004 9.004 0 01-8.716-6.747M12 21c2.485 0 4.5-4.03 4.5-9S14.485 3 12 3m0 18c-2.485 0-4.5-4.03-4.5-9S9.515 3 12 3m8.716 2.253A9.004 9.004 0 0012 3m8.716 2.253c.885 1.343 1.409 2.974 1.284 4.747m-1.284-4.747A8.963 8.963 0 0121 12",
    },
];

pub fn upcoming_events() -> Vec<&'static Event> {
    EVENTS
        .iter()
        .filter(|e| e.status == EventStatus::Upcoming)
        .collect()
}

pub fn past_events() -> Vec<&'static Event> {
    EVENTS
        .iter()
        .filter(|e| e.status == EventStatus::Past)
        .collect()
}

pub fn event_by_slug(slug: &str) -> Option<&'static Event> {
    EVENTS.iter().find(|e| e.slug == slug)
}

pub fn speakers_by_slugs(slugs: &[&str]) -> Vec<&'static Speaker> {
    slugs
        .iter()
        .filter_map(|slug| SPEAKERS.iter().find(|s| s.slug == *slug))
        .collect()
}

pub fn featured_speakers() -> Vec<&'static Speaker> {
    SPEAKERS.iter().filter(|s| s.is_featured).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_lookup_by_slug() {
        assert!(event_by_slug("healthspan-summit-2026").is_some());
        assert!(event_by_slug("no-such-event").is_none());
    }

    #[test]
    fn every_event_speaker_slug_resolves() {
        for event in EVENTS {
            let resolved = speakers_by_slugs(event.speaker_slugs);
            assert_eq!(
                resolved.len(),
                event.speaker_slugs.len(),
                "dangling speaker slug on {}",
                event.slug
            );
        }
    }

    #[test]
    fn upcoming_and_past_partition_the_events() {
        assert_eq!(upcoming_events().len() + past_events().len(), EVENTS.len());
    }

    #[test]
    fn featured_speakers_are_a_nonempty_subset() {
        let featured = featured_speakers();
        assert!(!featured.is_empty());
        assert!(featured.len() < SPEAKERS.len());
    }
}
