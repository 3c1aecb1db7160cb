//! Static resume data rendered by the pie, map, and relation pages.

pub struct CourseGrade {
    pub course: &'static str,
    pub score: u64,
}

pub const COURSE_GRADES: [CourseGrade; 6] = [
    CourseGrade {
        course: "C Programming",
        score: 76,
    },
    CourseGrade {
        course: "Analog Electronics",
        score: 90,
    },
    CourseGrade {
        course: "Digital Electronics",
        score: 88,
    },
    CourseGrade {
        course: "Signals and Systems",
        score: 79,
    },
    CourseGrade {
        course: "Engineering Electromagnetics",
        score: 92,
    },
    CourseGrade {
        course: "Digital Signal Processing",
        score: 86,
    },
];

pub struct Relation {
    pub name: &'static str,
    pub relation: &'static str,
    pub desc: &'static str,
}

pub const RELATIONS: [Relation; 8] = [
    Relation {
        name: "叶马可",
        relation: "Roommate",
        desc: "Electronics class 1 of 2022, CQUT",
    },
    Relation {
        name: "刘烨",
        relation: "Roommate",
        desc: "Electronics class 1 of 2022, CQUT",
    },
    Relation {
        name: "熊秋锦",
        relation: "Roommate",
        desc: "Electronics class 1 of 2022, CQUT",
    },
    Relation {
        name: "王培荣",
        relation: "Teacher",
        desc: "Data visualization lecturer, CQUT",
    },
    Relation {
        name: "李瑞",
        relation: "Classmate",
        desc: "Electronics class 4 of 2022, CQUT",
    },
    Relation {
        name: "邹承江",
        relation: "Junior",
        desc: "Electronics class 4 of 2023, CQUT",
    },
    Relation {
        name: "胡新宇",
        relation: "Class adviser",
        desc: "Party committee secretary, CQUT",
    },
    Relation {
        name: "胡斌",
        relation: "Classmate",
        desc: "Communications class 3 of 2022, CQUT",
    },
];

pub struct CampusLocation {
    pub name: &'static str,
    /// Longitude and latitude.
    pub coords: (f64, f64),
}

pub const CAMPUS_LOCATIONS: [CampusLocation; 3] = [
    CampusLocation {
        name: "Zhongshan Library",
        coords: (106.537114, 29.459216),
    },
    CampusLocation {
        name: "First Laboratory Building",
        coords: (106.534906, 29.460919),
    },
    CampusLocation {
        name: "Academic Affairs Office",
        coords: (106.536397, 29.464051),
    },
];

pub const HOME_INTRO: &str = "\
Liao Yunchuan (廖云川)

Electronics class 1 of 2022
School of Electrical and Electronic Engineering
Chongqing University of Technology

Welcome. This is a small portfolio you can walk through page by page:
course grades, a campus map, the people around me, and the music I
keep on in the background. Navigate with the number keys, or press
Backspace to come back here.";
