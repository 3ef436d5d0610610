use srcmodel_lib::component::ComponentKind;

pub fn cmd_info() {
  println!("srcmodel {}", env!("CARGO_PKG_VERSION"));
  println!("Component kinds:");
  for kind in ComponentKind::ALL {
    let roles: Vec<&str> = kind.source_roles().iter().map(|r| r.name).collect();
    let buckets: Vec<&str> = kind.bucket_roles().iter().map(|r| r.suffix()).collect();
    println!(
      "  {} ({}): sources [{}], configurations [{}]",
      kind.id(),
      kind.type_name(),
      roles.join(", "),
      buckets.join(", ")
    );
  }
}
