//! Static marketing content served by the catalog endpoints.
//!
//! Everything here is a `'static` literal. Handlers serialize these values
//! directly, so repeated requests return identical bodies.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stats {
    pub members: u32,
    pub coaches: u32,
    pub classes: u32,
    pub zones: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Facility {
    pub name: &'static str,
    pub items: &'static [&'static str],
    pub icon: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PersonalTraining {
    pub title: &'static str,
    pub duration: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassTraining {
    pub name: &'static str,
    pub schedule: &'static str,
    pub level: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TransformationProgram {
    pub name: &'static str,
    pub includes: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CorporateProgram {
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Programs {
    pub personal_training: PersonalTraining,
    pub class_training: &'static [ClassTraining],
    pub transformation: &'static [TransformationProgram],
    pub corporate: CorporateProgram,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MembershipTier {
    pub name: &'static str,
    /// Monthly price in IDR.
    pub price: u32,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlogPost {
    pub title: &'static str,
    pub category: &'static str,
    /// Estimated reading time.
    pub minutes: u32,
    pub thumbnail: &'static str,
}

pub const STATS: Stats = Stats {
    members: 800,
    coaches: 12,
    classes: 20,
    zones: 4,
};

pub const FACILITIES: &[Facility] = &[
    Facility {
        name: "Strength Zone",
        items: &["Squat Rack", "Bench Press", "Bumper Plates", "Dumbbell 2–50 kg"],
        icon: "dumbbell",
        image: "/images/strength.jpg",
        description: "Area khusus untuk latihan compound dan kekuatan, dilengkapi rack, bench, dan berbagai beban untuk progres bertahap.",
    },
    Facility {
        name: "Functional Zone",
        items: &["TRX", "Battle Rope", "Kettlebell", "Plyo Box"],
        icon: "activity",
        image: "/images/functional.jpg",
        description: "Ruang untuk melatih gerakan harian yang bermanfaat, meningkatkan mobilitas, stabilitas, dan kardio.",
    },
    Facility {
        name: "Cardio Area",
        items: &["Treadmill", "Cross Trainer", "Rowing Machine"],
        icon: "heart-pulse",
        image: "/images/cardio.jpg",
        description: "Zona kardio modern dengan alat low-impact hingga high-intensity untuk pembakaran kalori optimal.",
    },
    Facility {
        name: "Studio Class",
        items: &["Yoga", "Pilates", "Dance Fit", "HIIT"],
        icon: "music",
        image: "/images/studio.jpg",
        description: "Studio nyaman untuk berbagai kelas kelompok yang dipandu instruktur bersertifikat.",
    },
    Facility {
        name: "Locker & Shower",
        items: &["Smart Locker", "Clean Shower", "Hair Dryer"],
        icon: "locker",
        image: "/images/locker.jpg",
        description: "Fasilitas penyimpanan aman dan kamar mandi bersih untuk mendukung aktivitas harian Anda.",
    },
];

pub const PROGRAMS: Programs = Programs {
    personal_training: PersonalTraining {
        title: "Personal Training",
        duration: "12 minggu",
        features: &[
            "1-on-1 dengan pelatih",
            "Body composition tracking",
            "Meal guideline",
            "Weekly evaluation",
        ],
    },
    class_training: &[
        ClassTraining {
            name: "HIIT Burn",
            schedule: "Senin & Kamis",
            level: "Intermediate",
            icon: "flame",
        },
        ClassTraining {
            name: "StrongLift",
            schedule: "Selasa & Jumat",
            level: "Intermediate-Advanced",
            icon: "dumbbell",
        },
        ClassTraining {
            name: "Yoga Rewind",
            schedule: "Rabu",
            level: "Beginner",
            icon: "leaf",
        },
        ClassTraining {
            name: "Bootcamp",
            schedule: "Sabtu",
            level: "All Levels",
            icon: "users",
        },
        ClassTraining {
            name: "Mobility Flow",
            schedule: "Minggu",
            level: "All Levels",
            icon: "move",
        },
    ],
    transformation: &[
        TransformationProgram {
            name: "Fat Loss 8 Minggu",
            includes: &["InBody check", "Konsultasi nutrisi", "Before–After tracking"],
        },
        TransformationProgram {
            name: "Muscle Gain 12 Minggu",
            includes: &["InBody check", "Konsultasi nutrisi", "Program kekuatan progresif"],
        },
    ],
    corporate: CorporateProgram {
        description: "Paket untuk perusahaan 20–50 orang, on-site class, monthly workshop (mental & fisik)",
    },
};

pub const MEMBERSHIPS: &[MembershipTier] = &[
    MembershipTier {
        name: "Basic",
        price: 199_000,
        color: "#F5F5F5",
        highlight: None,
        features: &["Akses 06.00–18.00", "Akses cardio & strength"],
    },
    MembershipTier {
        name: "Standard",
        price: 299_000,
        color: "#13C28D",
        highlight: Some(true),
        features: &["Akses penuh 06.00–22.00", "Semua zona", "2x kelas/minggu"],
    },
    MembershipTier {
        name: "Premium",
        price: 499_000,
        color: "#FF9E2C",
        highlight: None,
        features: &["PT konsultasi 1x/minggu", "Unlimited class", "Progress tracking"],
    },
];

pub const BLOGS: &[BlogPost] = &[
    BlogPost {
        title: "Panduan Workout untuk Pemula",
        category: "guideline pemula",
        minutes: 4,
        thumbnail: "/images/blog1.jpg",
    },
    BlogPost {
        title: "Nutrisi Dasar untuk Fat Loss",
        category: "nutrisi",
        minutes: 5,
        thumbnail: "/images/blog2.jpg",
    },
    BlogPost {
        title: "5 Tips Menjaga Kesehatan Mental",
        category: "mental health",
        minutes: 3,
        thumbnail: "/images/blog3.jpg",
    },
];
