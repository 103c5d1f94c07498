//! The demo dataset every fresh store starts from.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::{
  directory::{
    EnrollmentStatus, FacultyOrganizer, Institution, InstitutionId,
    InstitutionKind, OrganizerStatus,
  },
  event::{EventId, EventProposal, EventStatus, Organizer},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
  NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

fn created(y: i32, m: u32, d: u32) -> DateTime<Utc> {
  date(y, m, d).and_time(NaiveTime::MIN).and_utc()
}

fn organizer(
  id: &str,
  name: &str,
  department: &str,
  institution: &str,
  district: &str,
) -> Organizer {
  Organizer {
    id:          id.into(),
    name:        name.into(),
    department:  department.into(),
    institution: institution.into(),
    district:    district.into(),
  }
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

/// The eight seeded proposals, in their fixed order.
pub fn demo_events() -> Vec<EventProposal> {
  vec![
    EventProposal {
      id:                    EventId::from("1"),
      title:                 "Inter-College Tech Symposium 2024".into(),
      description:           "A grand symposium for engineering students to \
                              showcase their technical prowess featuring paper \
                              presentations and live coding."
        .into(),
      category:              "Technical".into(),
      date:                  date(2024, 5, 15),
      time:                  time(9, 0),
      venue:                 "Main Auditorium".into(),
      organizer:             organizer(
        "org1",
        "Dr. Sarah Wilson",
        "Computer Science",
        "Anna University",
        "Chennai",
      ),
      budget:                Some(50_000),
      expected_participants: 300,
      objectives:            strings(&[
        "Foster technical innovation",
        "Promote networking",
        "Industry-academia bridge",
      ]),
      status:                EventStatus::Approved,
      rejection_reason:      None,
      created_at:            created(2024, 3, 1),
      current_registrations: 145,
      capacity:              300,
      outcomes:              None,
      winners:               None,
    },
    EventProposal {
      id:                    EventId::from("2"),
      title:                 "Annual Cultural Fest: Heritage 24".into(),
      description:           "Celebrating our cultural roots through music, \
                              dance, and art. Includes traditional food stalls \
                              and folk performances."
        .into(),
      category:              "Cultural".into(),
      date:                  date(2024, 6, 10),
      time:                  time(18, 0),
      venue:                 "Open Air Theatre".into(),
      organizer:             organizer(
        "org2",
        "Prof. James Bond",
        "Arts & Humanities",
        "PSG College of Technology",
        "Coimbatore",
      ),
      budget:                Some(120_000),
      expected_participants: 1000,
      objectives:            strings(&[
        "Cultural exchange",
        "Showcase talent",
        "Preserve heritage",
      ]),
      status:                EventStatus::Pending,
      rejection_reason:      None,
      created_at:            created(2024, 3, 5),
      current_registrations: 0,
      capacity:              1000,
      outcomes:              None,
      winners:               None,
    },
    EventProposal {
      id:                    EventId::from("3"),
      title:                 "AI Ethics Workshop".into(),
      description:           "A discussion on the ethical implications of \
                              artificial intelligence in modern society, led \
                              by industry experts."
        .into(),
      category:              "Workshop".into(),
      date:                  date(2024, 4, 20),
      time:                  time(14, 0),
      venue:                 "Seminar Hall 1".into(),
      organizer:             organizer(
        "org1",
        "Dr. Sarah Wilson",
        "Computer Science",
        "Anna University",
        "Chennai",
      ),
      budget:                Some(5_000),
      expected_participants: 50,
      objectives:            strings(&[
        "Critical thinking",
        "Ethics awareness",
        "Responsible AI use",
      ]),
      status:                EventStatus::Completed,
      rejection_reason:      None,
      created_at:            created(2024, 2, 15),
      current_registrations: 48,
      capacity:              50,
      outcomes:              Some(strings(&[
        "Students understood AI bias",
        "Ethical guidelines drafted for project work",
      ])),
      winners:               Some(strings(&["Alice Cooper", "Bob Marley"])),
    },
    EventProposal {
      id:                    EventId::from("4"),
      title:                 "Campus Basketball League".into(),
      description:           "Inter-departmental basketball tournament aimed \
                              at promoting sportsmanship and physical health."
        .into(),
      category:              "Sports".into(),
      date:                  date(2024, 4, 12),
      time:                  time(16, 0),
      venue:                 "Indoor Sports Complex".into(),
      organizer:             organizer(
        "org3",
        "Coach Mike Tyson",
        "Physical Education",
        "Thiagarajar College of Engineering",
        "Madurai",
      ),
      budget:                Some(25_000),
      expected_participants: 120,
      objectives:            strings(&[
        "Improve fitness",
        "Team building",
        "Competitive spirit",
      ]),
      status:                EventStatus::Approved,
      rejection_reason:      None,
      created_at:            created(2024, 3, 10),
      current_registrations: 88,
      capacity:              120,
      outcomes:              None,
      winners:               None,
    },
    EventProposal {
      id:                    EventId::from("5"),
      title:                 "Machine Learning Masterclass".into(),
      description:           "Hands-on intensive masterclass on Deep Learning \
                              and Neural Networks for final year students."
        .into(),
      category:              "Technical".into(),
      date:                  date(2024, 7, 5),
      time:                  time(10, 0),
      venue:                 "Lab 4 - IT Dept".into(),
      organizer:             organizer(
        "org4",
        "Dr. Emily Chen",
        "Information Technology",
        "NIT Trichy",
        "Trichy",
      ),
      budget:                Some(15_000),
      expected_participants: 40,
      objectives:            strings(&[
        "Skill development",
        "Career readiness",
        "Project mentoring",
      ]),
      status:                EventStatus::Pending,
      rejection_reason:      None,
      created_at:            created(2024, 3, 15),
      current_registrations: 0,
      capacity:              40,
      outcomes:              None,
      winners:               None,
    },
    EventProposal {
      id:                    EventId::from("6"),
      title:                 "Cybersecurity Awareness Seminar".into(),
      description:           "Critical seminar on personal digital security, \
                              phishing prevention, and safe internet practices."
        .into(),
      category:              "Seminar".into(),
      date:                  date(2024, 4, 28),
      time:                  time(11, 0),
      venue:                 "Main Auditorium".into(),
      organizer:             organizer(
        "org1",
        "Dr. Sarah Wilson",
        "Computer Science",
        "IIT Madras",
        "Chennai",
      ),
      budget:                Some(2_000),
      expected_participants: 200,
      objectives:            strings(&[
        "Security awareness",
        "Risk mitigation",
        "Best practices",
      ]),
      status:                EventStatus::Approved,
      rejection_reason:      None,
      created_at:            created(2024, 3, 18),
      current_registrations: 45,
      capacity:              200,
      outcomes:              None,
      winners:               None,
    },
    EventProposal {
      id:                    EventId::from("7"),
      title:                 "Business Plan Pitch Deck 2024".into(),
      description:           "Startup pitching event for aspiring student \
                              entrepreneurs to present their business models \
                              to a panel of investors."
        .into(),
      category:              "Academic".into(),
      date:                  date(2024, 5, 22),
      time:                  time(14, 30),
      venue:                 "Conference Room B".into(),
      organizer:             organizer(
        "org5",
        "Prof. Robert Kiyosaki",
        "Management Studies",
        "Loyola College",
        "Chennai",
      ),
      budget:                Some(35_000),
      expected_participants: 100,
      objectives:            strings(&[
        "Entrepreneurship growth",
        "Pitching skills",
        "Funding opportunities",
      ]),
      status:                EventStatus::Pending,
      rejection_reason:      None,
      created_at:            created(2024, 3, 20),
      current_registrations: 0,
      capacity:              100,
      outcomes:              None,
      winners:               None,
    },
    EventProposal {
      id:                    EventId::from("8"),
      title:                 "Sustainable Living Exhibition".into(),
      description:           "A showcase of eco-friendly projects, organic \
                              farming techniques, and zero-waste lifestyles."
        .into(),
      category:              "Academic".into(),
      date:                  date(2024, 3, 10),
      time:                  time(10, 0),
      venue:                 "Campus Green Belt".into(),
      organizer:             organizer(
        "org6",
        "Dr. Jane Goodall",
        "Environmental Science",
        "SRM Institute of Science and Technology",
        "Kanchipuram",
      ),
      budget:                Some(12_000),
      expected_participants: 250,
      objectives:            strings(&[
        "Sustainability education",
        "Eco-awareness",
        "Innovation",
      ]),
      status:                EventStatus::Completed,
      rejection_reason:      None,
      created_at:            created(2024, 1, 20),
      // Walk-ins pushed this one past capacity.
      current_registrations: 310,
      capacity:              250,
      outcomes:              Some(strings(&[
        "Planted 100 saplings",
        "Zero-waste guidelines adopted by cafeteria",
      ])),
      winners:               Some(strings(&[
        "Green Warriors Team",
        "Eco-Tech Innovators",
      ])),
    },
  ]
}

fn institution(
  n: usize,
  name: &str,
  admin: &str,
  district: &str,
  kind: InstitutionKind,
  status: EnrollmentStatus,
  students: u32,
) -> Institution {
  Institution {
    id: InstitutionId::nth(n),
    name: name.into(),
    admin: admin.into(),
    district: district.into(),
    kind,
    status,
    students,
    autonomous: false,
    naac_grade: None,
    nba_accredited: false,
    website: None,
  }
}

/// The five registered institutions, `TN-1001`..`TN-1005`.
pub fn demo_institutions() -> Vec<Institution> {
  use EnrollmentStatus::{Active, Pending};
  use InstitutionKind::{ArtsAndScience, Engineering, University};

  vec![
    institution(
      0,
      "Anna University",
      "admin@annauniv.edu",
      "Chennai",
      University,
      Active,
      12_500,
    ),
    institution(
      1,
      "PSG College of Technology",
      "principal@psgtech.edu",
      "Coimbatore",
      Engineering,
      Active,
      8_500,
    ),
    institution(
      2,
      "Madras Christian College",
      "admin@mcc.edu",
      "Chennai",
      ArtsAndScience,
      Active,
      6_200,
    ),
    institution(
      3,
      "NIT Trichy",
      "director@nitt.edu",
      "Trichy",
      Engineering,
      Active,
      7_800,
    ),
    institution(
      4,
      "Loyola College",
      "principal@loyola.edu",
      "Chennai",
      ArtsAndScience,
      Pending,
      5_400,
    ),
  ]
}

fn faculty(
  id: &str,
  name: &str,
  email: &str,
  department: &str,
  title: &str,
  status: OrganizerStatus,
  events_hosted: u32,
) -> FacultyOrganizer {
  FacultyOrganizer {
    id: id.into(),
    name: name.into(),
    email: email.into(),
    department: department.into(),
    title: title.into(),
    status,
    events_hosted,
  }
}

/// The faculty organizer roster.
pub fn demo_organizers() -> Vec<FacultyOrganizer> {
  use OrganizerStatus::{Active, Inactive};

  vec![
    faculty(
      "1",
      "Dr. Sarah Wilson",
      "sarah.cs@college.edu",
      "Computer Science",
      "Professor",
      Active,
      12,
    ),
    faculty(
      "2",
      "Prof. James Bond",
      "james.arts@college.edu",
      "Arts & Humanities",
      "HOD",
      Active,
      8,
    ),
    faculty(
      "3",
      "Dr. Emily Chen",
      "emily.it@college.edu",
      "Information Technology",
      "Asst. Professor",
      Active,
      5,
    ),
    faculty(
      "4",
      "Coach Mike Tyson",
      "mike.sports@college.edu",
      "Physical Education",
      "Sports Director",
      Active,
      15,
    ),
    faculty(
      "5",
      "Prof. Robert Kiyosaki",
      "robert.biz@college.edu",
      "Management Studies",
      "Professor",
      Inactive,
      3,
    ),
    faculty(
      "6",
      "Dr. Jane Goodall",
      "jane.env@college.edu",
      "Environmental Science",
      "Research Head",
      Active,
      6,
    ),
  ]
}
