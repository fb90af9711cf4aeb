pub const PAGE_STYLES: &str = r#"
/* Listing pages */
.page-content {
  padding: 120px 60px 60px;
  min-height: 200vh;
}

.page-title {
  font-size: 28px;
  font-weight: 400;
  margin-bottom: 24px;
}

.listing {
  display: grid;
  grid-template-columns: repeat(6, 1fr);
  gap: 5px;
}
"#;
