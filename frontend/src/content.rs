use crate::components::icons::IconKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub review: &'static str,
    /// 1..=5, rendered as that many stars.
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub id: u32,
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub icon: IconKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedQuote {
    pub quote: &'static str,
    pub author: &'static str,
    pub title: &'static str,
}

pub const MAX_RATING: u8 = 5;

pub const REVIEWS: &[Review] = &[
    Review {
        id: 1,
        name: "Reed Hastings",
        role: "CEO",
        company: "Streaming Giant",
        review: "This platform has revolutionized how we think about content streaming and AI tools bundling. It's the future of digital entertainment.",
        rating: 5,
    },
    Review {
        id: 2,
        name: "Sarah Johnson",
        role: "Content Creator",
        company: "Digital Studios",
        review: "The AI tools integration with streaming services is groundbreaking. It's changed how we create and consume content.",
        rating: 5,
    },
    Review {
        id: 3,
        name: "Michael Chen",
        role: "Tech Director",
        company: "AI Solutions",
        review: "Finally, a platform that combines premium streaming with cutting-edge AI tools. Exactly what the market needed.",
        rating: 5,
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: 1,
        name: "Best Streaming Platform",
        issuer: "Digital Innovation Awards",
        year: "2023",
        icon: IconKind::Crown,
    },
    Certification {
        id: 2,
        name: "Security Excellence",
        issuer: "Cyber Security Standards",
        year: "2023",
        icon: IconKind::Shield,
    },
    Certification {
        id: 3,
        name: "AI Innovation Award",
        issuer: "Tech Excellence Awards",
        year: "2023",
        icon: IconKind::Award,
    },
];

pub const FEATURED_QUOTE: FeaturedQuote = FeaturedQuote {
    quote: "The perfect blend of streaming and AI tools. This platform is revolutionizing how we experience digital content and productivity.",
    author: "Sam Anderson",
    title: "CEO, Tech Innovators",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ratings_are_in_range() {
        assert!(REVIEWS.iter().all(|r| (1..=MAX_RATING).contains(&r.rating)));
    }

    #[test]
    fn ids_are_unique() {
        let review_ids: HashSet<_> = REVIEWS.iter().map(|r| r.id).collect();
        assert_eq!(review_ids.len(), REVIEWS.len());
        let cert_ids: HashSet<_> = CERTIFICATIONS.iter().map(|c| c.id).collect();
        assert_eq!(cert_ids.len(), CERTIFICATIONS.len());
    }

    #[test]
    fn hard_coded_records() {
        let names: Vec<_> = REVIEWS.iter().map(|r| r.name).collect();
        assert_eq!(names, ["Reed Hastings", "Sarah Johnson", "Michael Chen"]);
        assert!(CERTIFICATIONS.iter().all(|c| c.year == "2023"));
        assert_eq!(FEATURED_QUOTE.author, "Sam Anderson");
    }
}
