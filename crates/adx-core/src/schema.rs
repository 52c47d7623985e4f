mod mapping_entry;
pub use mapping_entry::{expand, flatten, MappingEntry};

mod mapping_id;
pub use mapping_id::MappingId;

mod mapping_kind;
pub use mapping_kind::MappingKind;

mod table_mapping;
pub use table_mapping::TableMapping;
