//! Renders one model file per table

use crate::catalog::FieldDescriptor;
use crate::typemap::TypeMap;

use super::naming::{field_tag, sanitize_comment, title};
use super::template::{SlotValues, Template};

const TIME_IMPORT: &str = "\nimport \"time\"\n";

/// Fills a template with the fields of one table at a time
pub struct Renderer<'a> {
    template: &'a Template,
    type_map: &'static TypeMap,
    package_name: String,
}

impl<'a> Renderer<'a> {
    pub fn new(template: &'a Template, type_map: &'static TypeMap, package_name: &str) -> Self {
        Self {
            template,
            type_map,
            package_name: package_name.to_string(),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// `\t<Name> <Type> <Tag> //<comment>\n`
    pub fn field_line(&self, field: &FieldDescriptor) -> String {
        format!(
            "\t{} {} {} //{}\n",
            title(&field.name),
            self.type_map.map(&field.native_type),
            field_tag(&field.name),
            sanitize_comment(&field.comment)
        )
    }

    /// Struct body: one line per field, in catalog order
    pub fn field_block(&self, fields: &[FieldDescriptor]) -> String {
        fields.iter().map(|f| self.field_line(f)).collect()
    }

    /// Slot values for one table
    pub fn slot_values(&self, table_name: &str, fields: &[FieldDescriptor]) -> SlotValues {
        let table_name_title = title(table_name);
        let table_comment = fields
            .first()
            .map(|f| sanitize_comment(&f.table_comment))
            .unwrap_or_default();
        let table_fields = self.field_block(fields);
        let table_struct = format!(
            "// {}\ntype {} struct {{\n{}}}\n",
            table_comment, table_name_title, table_fields
        );
        let needs_time = fields
            .iter()
            .any(|f| self.type_map.map(&f.native_type).needs_time_import());

        SlotValues {
            package_name: self.package_name.clone(),
            imports: if needs_time {
                TIME_IMPORT.to_string()
            } else {
                String::new()
            },
            table_comment,
            table_fields,
            table_struct,
            table_name_title,
            table_name: table_name.to_string(),
        }
    }

    /// Full file content for one table
    pub fn render(&self, table_name: &str, fields: &[FieldDescriptor]) -> String {
        self.template.render(&self.slot_values(table_name, fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typemap::{MYSQL, POSTGRES};

    fn field(name: &str, native_type: &str, comment: &str) -> FieldDescriptor {
        FieldDescriptor {
            table_comment: String::new(),
            name: name.to_string(),
            native_type: native_type.to_string(),
            comment: comment.to_string(),
            not_null: false,
        }
    }

    #[test]
    fn test_field_line() {
        let template = Template::builtin();
        let renderer = Renderer::new(&template, &MYSQL, "model");
        assert_eq!(
            renderer.field_line(&field("user_name", "varchar", "login name")),
            "\tUserName string `json:\"user_name\" gorm:\"column:user_name\"` //login name\n"
        );
    }

    #[test]
    fn test_user_table() {
        let template = Template::builtin();
        let renderer = Renderer::new(&template, &MYSQL, "model");
        let fields = vec![field("id", "tinyint", ""), field("user_name", "varchar", "")];

        let out = renderer.render("user", &fields);
        assert!(out.starts_with("package model\n\n// \ntype User struct {\n"));
        assert!(out.contains("\tId int8 `json:\"id\" gorm:\"column:id\"` //\n"));
        assert!(out.contains("\tUserName string `json:\"user_name\" gorm:\"column:user_name\"` //\n}\n"));
        assert!(out.contains("func (table *User) TableName() string {\n\treturn \"user\"\n}"));
        assert!(out.contains("func (table *User) Delete(m *User) error {"));
        assert!(!out.contains("import"));
    }

    #[test]
    fn test_time_import_and_comment() {
        let template = Template::builtin();
        let renderer = Renderer::new(&template, &POSTGRES, "entity");
        let mut created = field("created_at", "timestamptz", "set by\ntrigger {table_name}");
        created.table_comment = "Customer\naccounts".into();

        let out = renderer.render("account", &[created]);
        assert!(out.starts_with("package entity\n\nimport \"time\"\n\n// Customer accounts\n"));
        assert!(out.contains("\tCreatedAt time.Time "));
        assert!(out.contains("//set by trigger {table_name}\n"));
    }

    #[test]
    fn test_table_comment_is_never_invented() {
        let template = Template::parse("[{table_comment}]\n{table_fields}").unwrap();
        let renderer = Renderer::new(&template, &MYSQL, "model");
        let out = renderer.render("user", &[field("id", "int", "")]);
        assert!(out.starts_with("[]\n"));
        assert!(!out.contains("User"));
    }

    #[test]
    fn test_table_struct_slot() {
        let template = Template::parse("package {package_name}\n{table_struct}").unwrap();
        let renderer = Renderer::new(&template, &MYSQL, "model");
        let out = renderer.render("order_item", &[field("qty", "int unsigned", "")]);
        assert_eq!(
            out,
            "package model\n// \ntype OrderItem struct {\n\tQty uint `json:\"qty\" gorm:\"column:qty\"` //\n}\n"
        );
    }
}
