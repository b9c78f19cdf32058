pub mod ask;
pub mod contact;
pub mod courses;
pub mod dispatch;
pub mod lookup;
pub mod promote;
