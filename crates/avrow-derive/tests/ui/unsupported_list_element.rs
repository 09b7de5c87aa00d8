use avrow_derive::Mapper;

struct Opaque {
    value: u8,
}

#[derive(Mapper)]
#[mapper(rename_all = "snake")]
struct Catalog {
    items: Vec<Opaque>,
}

fn main() {}
