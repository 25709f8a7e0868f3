/// Assembles a full demo page: sidebar navigation plus main content.
pub fn render_page(title: &str, nav: &str, content: &str) -> String {
    format!(
        "<html><head><title>{title} - ImagickPixel demo</title></head><body>\
         <div class='container-fluid'><div class='row'>\
         <div class='col-sm-3 col-md-2 sidebar'>{nav}</div>\
         <div class='col-sm-9 col-md-10 main'><h1>{title}</h1>{content}</div>\
         </div></div></body></html>"
    )
}
