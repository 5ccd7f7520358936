mod common;
pub use self::common::{Query, QueryCommon};

mod filing;
pub use self::filing::FilingQuery;

mod directory;
pub use self::directory::{ClientQuery, LobbyistQuery};
