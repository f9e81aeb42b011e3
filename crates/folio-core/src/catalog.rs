//! Static catalog: fallback content compiled into the binary.
//!
//! The public page renders these records whenever the remote store has nothing
//! for a section, so the page is never empty.

use crate::content::{
  EndYear, Education, Experience, ExperienceImage, ExperienceKind,
  PRESENT, PersonalProfile, Present, Project, ProjectImage, ProjectStatus,
  Skill, SkillCategory, SocialLink,
};

const GITHUB: &str = "https://github.com/martuakevinamh";
const LINKEDIN: &str =
  "https://linkedin.com/in/martua-kevin-andreas-mual-hamonangan-lubis-1058ab3a6";
const INSTAGRAM: &str = "https://instagram.com/martuakevin_";
const EMAIL: &str = "kevinlubis2909@gmail.com";

const PMK: &str = "Persekutuan Mahasiswa Kristen (PMK) Institut Teknologi Sumatera";
const HMIF: &str = "Himpunan Mahasiswa Informatika (HMIF) Institut Teknologi Sumatera";
const ITERA: &str = "Institut Teknologi Sumatera";

pub fn profile() -> PersonalProfile {
  PersonalProfile {
    name:          "Martua Kevin A.M.H.Lubis".into(),
    role:          "Mahasiswa pada Institut Teknologi Sumatera".into(),
    bio:           "Saya adalah seorang mahasiswa semester 8 yang sedang mengejar \
                    ilmu di Institut Teknologi Sumatera. Saya memiliki minat yang \
                    besar terhadap pengembangan web, deep learning dan mobile."
      .into(),
    location:      "Indonesia".into(),
    email:         EMAIL.into(),
    github_url:    Some(GITHUB.into()),
    linkedin_url:  Some(LINKEDIN.into()),
    instagram_url: Some(INSTAGRAM.into()),
    resume_url:    None,
  }
}

fn category(title: &str, skills: &[&str]) -> SkillCategory {
  SkillCategory {
    id:     title.into(),
    title:  title.into(),
    skills: skills.iter().map(|s| Skill { name: (*s).into() }).collect(),
  }
}

pub fn skills() -> Vec<SkillCategory> {
  vec![
    category("Frontend", &["React", "Next.js", "TypeScript", "Tailwind CSS", "HTML/CSS"]),
    category("Backend & AI", &["Node.js", "REST API", "Firebase", "Supabase", "YOLO"]),
    category("Tools & Others", &["Git", "VS Code", "Figma", "Godot Engine", "Antigravity"]),
  ]
}

/// Category names offered by the admin skill form.
pub fn skill_categories() -> Vec<String> {
  skills().into_iter().map(|c| c.title).collect()
}

#[allow(clippy::too_many_arguments)]
fn experience(
  id: i64,
  title: &str,
  organization: &str,
  kind: ExperienceKind,
  start_date: &str,
  end_date: &str,
  description: &str,
  images: &[&str],
) -> Experience {
  Experience {
    id,
    title: title.into(),
    organization: organization.into(),
    kind,
    start_date: start_date.into(),
    end_date: end_date.into(),
    description: description.into(),
    images: images.iter().copied().map(ExperienceImage::centered).collect(),
  }
}

pub fn experiences() -> Vec<Experience> {
  use ExperienceKind::{Committee, Organization};
  vec![
    experience(
      1,
      "Kepala Departemen Creative Media & IT",
      PMK,
      Organization,
      "2024",
      "2025",
      "Memimpin Departemen Creative Media & IT dalam mengelola seluruh platform \
       digital organisasi, termasuk konten sosial media dan strategi publikasi \
       kegiatan organisasi.",
      &["/images/experience/org-1-1.jpg", "/images/experience/org-1-2.jpg"],
    ),
    experience(
      2,
      "Kepala Divisi Logistik (Departemen Operasional)",
      PMK,
      Organization,
      "2022",
      PRESENT,
      "Mengkoordinasikan kebutuhan logistik dan inventaris untuk kegiatan PMK \
       ITERA serta mengelola sistem peminjaman peralatan.",
      &["/images/experience/org-2-1.jpg"],
    ),
    experience(
      3,
      "Staff Komisi Aspirasi",
      HMIF,
      Organization,
      "2024",
      "2025",
      "Menjembatani komunikasi antara mahasiswa Informatika dengan pihak jurusan \
       dan institusi, serta menyalurkan aspirasi mahasiswa.",
      &["/images/experience/org-3-1.jpg"],
    ),
    experience(
      4,
      "Ketua Pelaksana PICC",
      PMK,
      Committee,
      "2025",
      "2025",
      "Memimpin dan mengkoordinasikan seluruh rangkaian kegiatan PICC (PMK ITERA \
       Christian Camp), dari perencanaan dan penganggaran hingga pelaksanaan.",
      &["/images/experience/com-1-1.jpg", "/images/experience/com-1-2.jpg"],
    ),
    experience(
      5,
      "Asisten Dosen Agama Kristen Protestan",
      ITERA,
      Committee,
      "2025",
      "2025",
      "Mendampingi dosen dalam perkuliahan Pendidikan Agama Kristen Protestan, \
       menyusun materi dan memfasilitasi diskusi kelas.",
      &["/images/experience/com-2-1.jpg"],
    ),
  ]
}

pub fn projects() -> Vec<Project> {
  vec![
    Project {
      id:          1,
      title:       "Website GKPI Bandar Lampung".into(),
      description: "Website resmi GKPI Bandar Lampung yang berfungsi sebagai \
                    platform informasi GKPI."
        .into(),
      images:      vec![ProjectImage::centered("/images/projects/project-1.jpg")],
      tags:        tags(&["Next.js", "TypeScript", "Tailwind", "PostgreSQL"]),
      demo_url:    Some("https://website-gkpibdl.vercel.app/".into()),
      github_url:  Some("https://github.com/kevinlubis2909/website-gkpibdl".into()),
      featured:    true,
      status:      ProjectStatus::Ongoing,
    },
    Project {
      id:          3,
      title:       "Personal Website".into(),
      description: "Website portfolio personal dengan desain modern dan animasi \
                    yang smooth."
        .into(),
      images:      vec![ProjectImage::centered("/images/projects/project-3.jpg")],
      tags:        tags(&["Next.js", "Tailwind CSS", "TypeScript"]),
      demo_url:    Some("https://personal-website.vercel.app/".into()),
      github_url:  Some("https://github.com/martuakevinamh/personal-website.git".into()),
      featured:    true,
      status:      ProjectStatus::Completed,
    },
    Project {
      id:          4,
      title:       "Game Pustaka Swardwipa".into(),
      description: "Game Pustaka Swardwipa yang berfungsi sebagai platform \
                    informasi Pustaka Swardwipa."
        .into(),
      images:      vec![ProjectImage::centered("/images/projects/project-4.jpg")],
      tags:        tags(&["Godot Engine", "GDScript"]),
      demo_url:    None,
      github_url:  Some("https://github.com/FadilRifqi/pustaka-swarnadwipa.git".into()),
      featured:    false,
      status:      ProjectStatus::Completed,
    },
  ]
}

fn tags(t: &[&str]) -> Vec<String> { t.iter().map(|s| (*s).to_owned()).collect() }

pub fn education() -> Vec<Education> {
  vec![
    Education {
      id:          1,
      institution: ITERA.into(),
      degree:      "Sarjana".into(),
      field:       "Teknik Informatika".into(),
      start_year:  2022,
      end_year:    EndYear::Present(Present),
      description: Some(
        "IPK 3.2 - Fokus pada Web Development dan Machine Learning".into(),
      ),
    },
    Education {
      id:          2,
      institution: "SMA Negeri 1 Matauli Pandan".into(),
      degree:      "SMA".into(),
      field:       "IPA".into(),
      start_year:  2019,
      end_year:    EndYear::Year(2022),
      description: None,
    },
  ]
}

pub fn social_links() -> Vec<SocialLink> {
  let link = |name: &str, url: String, icon: &str| SocialLink {
    name: name.into(),
    url,
    icon: icon.into(),
  };
  vec![
    link("GitHub", GITHUB.into(), "github"),
    link("LinkedIn", LINKEDIN.into(), "linkedin"),
    link("Instagram", INSTAGRAM.into(), "instagram"),
    link("Email", format!("mailto:{EMAIL}"), "email"),
  ]
}
