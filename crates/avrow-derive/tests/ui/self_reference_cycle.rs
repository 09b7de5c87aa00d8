use avrow_derive::Mapper;

#[derive(Mapper)]
#[mapper(rename_all = "snake")]
struct TreeNode {
    label: String,
    child: TreeNode,
}

fn main() {}
