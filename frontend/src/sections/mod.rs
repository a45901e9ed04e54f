// Landing page sections, in page order.

mod certifications;
mod contact;
mod footer;
mod home;
mod info;
mod reviews;

pub use certifications::Certifications;
pub use contact::Contact;
pub use footer::Footer;
pub use home::Home;
pub use info::Info;
pub use reviews::Reviews;
